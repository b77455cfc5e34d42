//! Time-slot grid generation and the minimum-notice buffer rule.
//!
//! Slots live on a fixed half-hour grid inside a weekday's business-hours
//! window. The grid itself is pure; the only clock dependency is the
//! "too soon" check, and the reference instant is always an explicit
//! parameter so callers (and tests) control it.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::format::split_hh_mm;
use crate::hours::{BusinessHours, HoursWindow};

/// Grid step between consecutive slots.
pub const SLOT_INTERVAL_MINUTES: u32 = 30;

/// Minimum notice before a slot can be booked, rounded up to the grid.
pub const MINIMUM_NOTICE_MINUTES: i64 = 30;

/// A single bookable half-hour, identified by its 24-hour start time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Slot start, `"HH:MM"` on the 24-hour clock.
    pub time: String,
    pub available: bool,
}

/// Generate the fallback slot grid.
///
/// Used when no real date context is available: the grid always follows the
/// Monday schedule, whatever day is actually being booked. Slots on today's
/// date that start before the minimum-notice buffer are marked unavailable.
pub fn generate_default_time_slots(hours: &BusinessHours, now: DateTime<Utc>) -> Vec<TimeSlot> {
    let window = hours.window(Weekday::Mon);
    let today = now.date_naive();

    enumerate_grid(window, |time| !is_before_minimum_buffer(time, today, now))
}

/// Whether a slot at `time` on `slot_date` starts too close to `now` to book.
///
/// The buffer is `now` plus the minimum notice, rounded up to the next
/// half-hour boundary. Dates "in the future" are never too soon -- but the
/// future check compares day, month, and year independently rather than
/// chronologically, so it misorders dates across month and year rollovers
/// (e.g. Dec 31 vs Jan 15 of the following year). Known quirk; the widget
/// depends on the current behavior, do not "fix" without coordinating.
pub fn is_before_minimum_buffer(time: &str, slot_date: NaiveDate, now: DateTime<Utc>) -> bool {
    if slot_date.day() > now.day() || slot_date.month() > now.month() || slot_date.year() > now.year()
    {
        return false;
    }

    let Some((hours, minutes)) = split_hh_mm(time) else {
        return false;
    };
    let Some(slot_instant) = slot_date.and_hms_opt(hours, minutes, 0).map(|dt| dt.and_utc())
    else {
        return false;
    };

    let mut buffer = now + Duration::minutes(MINIMUM_NOTICE_MINUTES);
    let remainder = buffer.minute() % SLOT_INTERVAL_MINUTES;
    if remainder > 0 {
        buffer += Duration::minutes(i64::from(SLOT_INTERVAL_MINUTES - remainder));
    }

    slot_instant < buffer
}

/// Walk a business-hours window in half-hour steps, deciding availability
/// per slot. Output is chronological with no gaps.
pub(crate) fn enumerate_grid<F>(window: HoursWindow, mut is_available: F) -> Vec<TimeSlot>
where
    F: FnMut(&str) -> bool,
{
    let mut slots = Vec::new();
    for hour in window.start..window.end {
        for minute in (0..60).step_by(SLOT_INTERVAL_MINUTES as usize) {
            let time = format!("{hour:02}:{minute:02}");
            let available = is_available(&time);
            slots.push(TimeSlot { time, available });
        }
    }
    slots
}
