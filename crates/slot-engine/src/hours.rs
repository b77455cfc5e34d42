//! Weekly business-hours table -- the universe of bookable slots per weekday.
//!
//! Windows are whole hours on the 24-hour clock, half-open `[start, end)`.
//! The table always covers all seven weekdays; a gap or reversed window is a
//! configuration error and is rejected at construction time, so lookups never
//! fail.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// Open/close window for one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursWindow {
    /// Opening hour (inclusive), 0-23.
    pub start: u32,
    /// Closing hour (exclusive), 1-24.
    pub end: u32,
}

/// Validated business hours for a full week, indexed by weekday
/// (0 = Sunday .. 6 = Saturday, matching the wire convention of the widget).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessHours {
    windows: [HoursWindow; 7],
}

impl BusinessHours {
    /// Build a validated table from per-weekday windows (index 0 = Sunday).
    ///
    /// # Errors
    /// Returns `SlotError::InvalidHours` if any window is empty or reversed,
    /// or closes past the 24-hour clock.
    pub fn try_new(windows: [HoursWindow; 7]) -> Result<Self> {
        for (day, window) in windows.iter().enumerate() {
            if window.start >= window.end {
                return Err(SlotError::InvalidHours(format!(
                    "weekday {} has empty window {}..{}",
                    day, window.start, window.end
                )));
            }
            if window.end > 24 {
                return Err(SlotError::InvalidHours(format!(
                    "weekday {} closes past midnight ({})",
                    day, window.end
                )));
            }
        }
        Ok(Self { windows })
    }

    /// The open/close window for the given weekday. Infallible: the table is
    /// exhaustive by construction.
    pub fn window(&self, weekday: Weekday) -> HoursWindow {
        self.windows[weekday.num_days_from_sunday() as usize]
    }
}

impl Default for BusinessHours {
    /// The studio schedule: Mon-Fri 9-20, Sat 9-16, Sun 9-14.
    fn default() -> Self {
        let window = |start, end| HoursWindow { start, end };
        Self::try_new([
            window(9, 14), // Sunday
            window(9, 20), // Monday
            window(9, 20), // Tuesday
            window(9, 20), // Wednesday
            window(9, 20), // Thursday
            window(9, 20), // Friday
            window(9, 16), // Saturday
        ])
        .expect("default business hours are statically valid")
    }
}
