//! Pure string conversions between 12-hour, 24-hour, ISO-date, and
//! ISO-datetime representations.
//!
//! Nothing in this module returns an error: malformed input degrades to a
//! best-effort rendering or passes through unchanged. The widget would rather
//! submit a sloppy timestamp than lose a booking over a formatting failure.

use std::sync::LazyLock;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Strict 24-hour wall-clock time, `H:MM` or `HH:MM`.
static TIME_24H: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]?[0-9]|2[0-3]):[0-5][0-9]$").unwrap());

/// 12-hour wall-clock time with meridiem, e.g. `2:30 PM`.
static TIME_12H: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d+):(\d+)\s*(AM|PM)$").unwrap());

/// Leading hour count in a duration label, e.g. `3 hours`.
static DURATION_HOURS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*hours?").unwrap());

/// End time and duration derived from a start instant and a duration label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndTimeAndDuration {
    /// Whole-second ISO datetime, `Z`-suffixed.
    pub end_time: String,
    /// Hour count rendered as `"HH:00"`.
    pub duration: String,
}

/// Format a date and wall-clock time for webhook submission:
/// `"{date}T{HH}:{MM}:00Z"`, hour and minute zero-padded.
///
/// A time with no `:` to split on degrades to a literal interpolation of the
/// raw string, unvalidated.
pub fn format_date_time_for_webhook(date: &str, time: &str) -> String {
    let parts: Vec<&str> = time.split(':').collect();
    match parts.as_slice() {
        // Anything past the minute component (stray seconds) is dropped.
        [hours, minutes, ..] => format!("{date}T{hours:0>2}:{minutes:0>2}:00Z"),
        _ => {
            tracing::warn!(time, "time not in HH:MM form, interpolating as-is");
            format!("{date}T{time}:00.000Z")
        }
    }
}

/// Render a `YYYY-MM-DD` date in English long form, e.g.
/// `"Monday, January 1, 2024"`.
///
/// Empty input yields an empty string; an unparseable date passes through
/// unchanged.
pub fn format_date_for_display(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }

    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%A, %B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Derive the booking end time and a `"HH:00"` duration from a start instant
/// and the duration label picked in the widget.
///
/// The label is pattern-matched: anything containing "Full day" means 8
/// hours, "Multiple days" means 24, otherwise the first `N hours` match wins.
/// A label matching none of these resolves to zero hours -- a silent,
/// zero-length result, not an error.
pub fn calculate_end_time_and_duration(
    start_time: &str,
    duration_string: &str,
) -> EndTimeAndDuration {
    let hours: i64 = if duration_string.contains("Full day") {
        8
    } else if duration_string.contains("Multiple days") {
        24
    } else {
        DURATION_HOURS
            .captures(duration_string)
            .and_then(|caps| caps[1].parse().ok())
            .unwrap_or(0)
    };

    let end_time = match parse_instant(start_time) {
        Some(start) => (start + Duration::hours(hours))
            .format("%Y-%m-%dT%H:%M:%SZ")
            .to_string(),
        None => {
            tracing::warn!(start_time, "start time not an ISO datetime");
            start_time.to_string()
        }
    };

    EndTimeAndDuration {
        end_time,
        duration: format!("{hours:02}:00"),
    }
}

/// Normalize an `H:MM` / `HH:MM` string to zero-padded `HH:MM`. Idempotent.
///
/// Empty input yields an empty string; anything that is not two numeric
/// components passes through unchanged.
pub fn format_time_for_display(time: &str) -> String {
    if time.is_empty() {
        return String::new();
    }

    match split_hh_mm(time) {
        Some((hours, minutes)) => format!("{hours:02}:{minutes:02}"),
        None => time.to_string(),
    }
}

/// Convert a wall-clock time to the 24-hour `HH:MM` storage form.
///
/// A string already in strict 24-hour form is returned unchanged (so `9:30`
/// stays `9:30`); a 12-hour `H:MM AM/PM` form is converted; anything else
/// passes through unchanged.
pub fn format_time_for_storage(time: &str) -> String {
    if time.is_empty() {
        return String::new();
    }

    if TIME_24H.is_match(time) {
        return time.to_string();
    }

    let Some(caps) = TIME_12H.captures(time) else {
        return time.to_string();
    };

    let mut hour: u32 = caps[1].parse().unwrap_or(0);
    let minutes = &caps[2];
    let meridiem = caps[3].to_ascii_uppercase();

    if meridiem == "PM" && hour < 12 {
        hour += 12;
    }
    if meridiem == "AM" && hour == 12 {
        hour = 0;
    }

    format!("{hour:02}:{minutes:0>2}")
}

/// Split an `HH:MM` string into numeric hour and minute components.
pub(crate) fn split_hh_mm(time: &str) -> Option<(u32, u32)> {
    let (hours, minutes) = time.split_once(':')?;
    Some((hours.parse().ok()?, minutes.parse().ok()?))
}

/// Best-effort ISO datetime parse, mirroring how lenient the widget's
/// upstream was about event timestamps: full RFC 3339, a bare local
/// datetime, and a bare date (midnight) are all accepted.
pub(crate) fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(parsed.and_utc());
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return parsed.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    None
}
