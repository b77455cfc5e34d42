//! Property-based tests for the time formatters using proptest.
//!
//! These verify invariants that should hold for *any* valid wall-clock time,
//! not just the examples in `format_tests.rs`.

use proptest::prelude::*;
use slot_engine::{
    calculate_end_time_and_duration, format_time_for_display, format_time_for_storage,
};

proptest! {
    /// Displaying then re-storing any zero-padded 24-hour time is lossless.
    #[test]
    fn display_then_storage_round_trips(hour in 0u32..24, minute in 0u32..60) {
        let time = format!("{hour:02}:{minute:02}");
        prop_assert_eq!(format_time_for_storage(&format_time_for_display(&time)), time);
    }

    /// Storage form is a fixed point: converting twice equals converting once.
    #[test]
    fn storage_is_idempotent(hour in 1u32..=12, minute in 0u32..60, pm in any::<bool>()) {
        let meridiem = if pm { "PM" } else { "AM" };
        let once = format_time_for_storage(&format!("{hour}:{minute:02} {meridiem}"));
        prop_assert_eq!(format_time_for_storage(&once), once.clone());
    }

    /// Twelve-hour conversion always lands on a valid 24-hour clock reading
    /// that preserves the minute component.
    #[test]
    fn twelve_hour_conversion_stays_on_the_clock(
        hour in 1u32..=12,
        minute in 0u32..60,
        pm in any::<bool>(),
    ) {
        let meridiem = if pm { "PM" } else { "AM" };
        let stored = format_time_for_storage(&format!("{hour}:{minute:02} {meridiem}"));

        let (h, m) = stored.split_once(':').expect("stored form is HH:MM");
        let h: u32 = h.parse().expect("numeric hour");
        let m: u32 = m.parse().expect("numeric minute");
        prop_assert!(h < 24);
        prop_assert_eq!(m, minute);
    }

    /// An "N hours" label always produces an end time exactly N hours after
    /// the start and an "N:00" duration.
    #[test]
    fn hour_labels_shift_end_time_exactly(hours in 0i64..=48) {
        let result =
            calculate_end_time_and_duration("2024-01-01T09:00:00Z", &format!("{hours} hours"));

        let start: chrono::DateTime<chrono::Utc> = "2024-01-01T09:00:00Z".parse().unwrap();
        let end: chrono::DateTime<chrono::Utc> =
            result.end_time.parse().expect("end time is RFC 3339");
        prop_assert_eq!(end - start, chrono::Duration::hours(hours));
        prop_assert_eq!(result.duration, format!("{hours:02}:00"));
    }
}
