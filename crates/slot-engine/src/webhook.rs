//! Booked-events payload parsing and per-day availability derivation.
//!
//! The fetch-times webhook returns either a bare array of booked events or an
//! object carrying a `bookedTimes` list. Both shapes normalize to the same
//! event list, which is bucketed by date and service and subtracted from the
//! selected day's slot grid.
//!
//! Parsing never fails outward: any unusable payload falls back to the
//! default grid, with the reason logged for diagnostics. Callers only ever
//! see a usable slot list.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::format::parse_instant;
use crate::hours::BusinessHours;
use crate::slots::{enumerate_grid, generate_default_time_slots, TimeSlot};

/// Start time of a booked event, as delivered on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStart {
    pub date_time: String,
}

/// An externally-booked appointment: a service reserved at a given instant.
///
/// Both fields are optional on the wire; events missing either are skipped
/// during bucketing rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedEvent {
    #[serde(default)]
    pub start: Option<EventStart>,
    #[serde(default)]
    pub service_id: Option<String>,
}

/// The two payload shapes the fetch-times webhook is known to return.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WebhookPayload {
    /// A bare array of booked events. Elements are kept as raw values so a
    /// single malformed event degrades to a skip, not a whole-payload error.
    Events(Vec<Value>),
    /// Booked start times for a single service.
    #[serde(rename_all = "camelCase")]
    BookedTimes {
        booked_times: Vec<String>,
        #[serde(default)]
        service_id: Option<String>,
    },
}

/// `date ISO -> service id -> set of "HH:MM" start times`, rebuilt per call.
type BookedTimesIndex = HashMap<String, HashMap<String, HashSet<String>>>;

/// Why a parse call fell back to the default grid. Diagnostics only; callers
/// always receive a usable slot list.
#[derive(Debug, Error)]
enum FallbackReason {
    #[error("payload shape not recognized: {0}")]
    UnrecognizedPayload(#[from] serde_json::Error),

    #[error("payload contained no events")]
    NoEvents,

    #[error("no date selected")]
    NoSelectedDate,

    #[error("selected date {0:?} is not a calendar date")]
    BadSelectedDate(String),

    #[error("event start {0:?} is not an ISO datetime")]
    BadEventStart(String),
}

/// Derive the slot grid for a date/service from a booked-events payload.
///
/// A slot is available iff its start time is not booked for the selected date
/// and service. Unusable payloads (wrong shape, no events, no selected date,
/// malformed dates) fall back to [`generate_default_time_slots`]; the caller
/// never sees a parse failure.
pub fn parse_webhook_time_slots(
    payload: &Value,
    selected_date_iso: &str,
    selected_service_id: &str,
    hours: &BusinessHours,
    now: DateTime<Utc>,
) -> Vec<TimeSlot> {
    match try_parse(payload, selected_date_iso, selected_service_id, hours) {
        Ok(slots) => slots,
        Err(reason) => {
            tracing::warn!(%reason, "webhook payload unusable, serving default grid");
            generate_default_time_slots(hours, now)
        }
    }
}

fn try_parse(
    payload: &Value,
    selected_date_iso: &str,
    selected_service_id: &str,
    hours: &BusinessHours,
) -> Result<Vec<TimeSlot>, FallbackReason> {
    let events = normalize_events(payload)?;
    if events.is_empty() {
        return Err(FallbackReason::NoEvents);
    }
    if selected_date_iso.is_empty() {
        return Err(FallbackReason::NoSelectedDate);
    }

    let index = index_booked_times(&events)?;
    let booked: HashSet<String> = index
        .get(selected_date_iso)
        .and_then(|by_service| by_service.get(selected_service_id))
        .cloned()
        .unwrap_or_default();

    let selected_date = NaiveDate::parse_from_str(selected_date_iso, "%Y-%m-%d")
        .map_err(|_| FallbackReason::BadSelectedDate(selected_date_iso.to_string()))?;

    let window = hours.window(selected_date.weekday());
    Ok(enumerate_grid(window, |time| !booked.contains(time)))
}

/// Normalize either payload shape into a uniform event list.
///
/// Array payloads pass through element by element; an element that does not
/// deserialize becomes an empty event (skipped later). `bookedTimes` payloads
/// synthesize one event per start time, all under the payload's `serviceId`
/// (empty when absent, which makes the synthesized events invalid for
/// bucketing -- the grid then comes back fully available).
fn normalize_events(payload: &Value) -> Result<Vec<BookedEvent>, FallbackReason> {
    let payload: WebhookPayload = serde_json::from_value(payload.clone())?;

    let events = match payload {
        WebhookPayload::Events(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect(),
        WebhookPayload::BookedTimes {
            booked_times,
            service_id,
        } => {
            let service_id = service_id.unwrap_or_default();
            booked_times
                .into_iter()
                .map(|time| BookedEvent {
                    start: Some(EventStart { date_time: time }),
                    service_id: Some(service_id.clone()),
                })
                .collect()
        }
    };

    Ok(events)
}

/// Bucket every valid event by `(date ISO, service id)` into its set of
/// `"HH:MM"` start times (UTC).
///
/// Events missing a start or a service id are skipped; a start that is
/// present but unparseable aborts the whole parse (and thus the fallback).
fn index_booked_times(events: &[BookedEvent]) -> Result<BookedTimesIndex, FallbackReason> {
    let mut index = BookedTimesIndex::new();

    for event in events {
        let Some(start) = &event.start else { continue };
        let Some(service_id) = &event.service_id else {
            continue;
        };
        if start.date_time.is_empty() || service_id.is_empty() {
            continue;
        }

        let instant = parse_instant(&start.date_time)
            .ok_or_else(|| FallbackReason::BadEventStart(start.date_time.clone()))?;

        let date_iso = instant.format("%Y-%m-%d").to_string();
        let start_time = instant.format("%H:%M").to_string();

        index
            .entry(date_iso)
            .or_default()
            .entry(service_id.clone())
            .or_default()
            .insert(start_time);
    }

    Ok(index)
}
