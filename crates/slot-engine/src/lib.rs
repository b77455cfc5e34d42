//! # slot-engine
//!
//! Appointment availability and time formatting for the studio booking widget.
//!
//! The engine derives a day's bookable half-hour slots from a weekly
//! business-hours table and a booked-events payload fetched from an external
//! scheduling webhook, and converts between the human-entered time strings of
//! the widget and the machine-readable ISO timestamps the webhooks expect.
//! It performs no I/O of its own: payloads arrive already fetched, and the
//! reference clock is always an explicit parameter.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use slot_engine::{generate_default_time_slots, BusinessHours};
//!
//! let hours = BusinessHours::default();
//! let now = Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap();
//!
//! // Monday 09:00..20:00 in half-hour steps.
//! let slots = generate_default_time_slots(&hours, now);
//! assert_eq!(slots.len(), 22);
//! assert_eq!(slots[0].time, "09:00");
//! ```
//!
//! ## Modules
//!
//! - [`hours`] — weekly business-hours table
//! - [`slots`] — slot grid generation and the minimum-notice rule
//! - [`webhook`] — booked-events payload parsing and availability derivation
//! - [`format`] — 12-hour/24-hour/ISO string conversions
//! - [`catalog`] — service catalog, webhook endpoints, booking configuration
//! - [`error`] — error types

pub mod catalog;
pub mod error;
pub mod format;
pub mod hours;
pub mod slots;
pub mod webhook;

pub use catalog::{format_selected_services, BookingConfig, SelectedServices, Service};
pub use error::SlotError;
pub use format::{
    calculate_end_time_and_duration, format_date_for_display, format_date_time_for_webhook,
    format_time_for_display, format_time_for_storage, EndTimeAndDuration,
};
pub use hours::{BusinessHours, HoursWindow};
pub use slots::{generate_default_time_slots, is_before_minimum_buffer, TimeSlot};
pub use webhook::{parse_webhook_time_slots, BookedEvent, WebhookPayload};
