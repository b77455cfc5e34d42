//! Tests for the weekly business-hours table.

use chrono::Weekday;
use slot_engine::{BusinessHours, HoursWindow, SlotError};

#[test]
fn default_table_covers_all_weekdays_with_valid_windows() {
    let hours = BusinessHours::default();

    for weekday in [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ] {
        let window = hours.window(weekday);
        assert!(
            window.start < window.end,
            "{:?} window must be non-empty",
            weekday
        );
    }
}

#[test]
fn default_table_matches_studio_schedule() {
    let hours = BusinessHours::default();

    for weekday in [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ] {
        assert_eq!(hours.window(weekday), HoursWindow { start: 9, end: 20 });
    }
    assert_eq!(
        hours.window(Weekday::Sat),
        HoursWindow { start: 9, end: 16 }
    );
    assert_eq!(
        hours.window(Weekday::Sun),
        HoursWindow { start: 9, end: 14 }
    );
}

#[test]
fn reversed_window_is_rejected() {
    let mut windows = [HoursWindow { start: 9, end: 20 }; 7];
    windows[3] = HoursWindow { start: 20, end: 9 };

    let err = BusinessHours::try_new(windows).unwrap_err();
    assert!(matches!(err, SlotError::InvalidHours(_)));
}

#[test]
fn empty_window_is_rejected() {
    let mut windows = [HoursWindow { start: 9, end: 20 }; 7];
    windows[0] = HoursWindow { start: 9, end: 9 };

    assert!(BusinessHours::try_new(windows).is_err());
}

#[test]
fn window_past_midnight_is_rejected() {
    let mut windows = [HoursWindow { start: 9, end: 20 }; 7];
    windows[6] = HoursWindow { start: 9, end: 25 };

    assert!(BusinessHours::try_new(windows).is_err());
}

#[test]
fn valid_custom_table_is_accepted() {
    let windows = [HoursWindow { start: 0, end: 24 }; 7];
    let hours = BusinessHours::try_new(windows).unwrap();
    assert_eq!(hours.window(Weekday::Wed).end, 24);
}
