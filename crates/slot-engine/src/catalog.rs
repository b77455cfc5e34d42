//! Static service catalog, webhook endpoints, and booking configuration.
//!
//! Everything here is configuration consumed by value: built once at process
//! start and passed into the availability and formatting functions rather
//! than read as ambient state.

use serde::{Deserialize, Serialize};

use crate::hours::BusinessHours;

/// Endpoint that returns already-booked times for a date/service.
pub const FETCH_TIMES_WEBHOOK: &str =
    "https://hook.eu2.make.com/v8uyxznv6fs4wgujsq9wciry75bi4yww";

/// Endpoint that receives a completed booking submission.
pub const SUBMIT_BOOKING_WEBHOOK: &str =
    "https://hook.eu2.make.com/0nkof5nts54ecf0u7f50qyoy2mtffljf";

/// One bookable service as shown in the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub price: String,
    #[serde(default)]
    pub is_premium: bool,
}

/// Ids and display names of the services picked for a webhook submission.
///
/// Ids are returned exactly as given; names are resolved against the catalog
/// and unresolved ids are dropped from the name list only, so the two lists
/// may differ in length. Callers rely on the id list being untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedServices {
    pub selected_services: Vec<String>,
    pub service_names: Vec<String>,
}

/// Resolve selected service ids to display names for webhook submission.
///
/// An id with no catalog match contributes nothing to `service_names`; it is
/// not reported anywhere.
pub fn format_selected_services(selected: &[String], services: &[Service]) -> SelectedServices {
    let service_names: Vec<String> = selected
        .iter()
        .map(|id| {
            services
                .iter()
                .find(|service| &service.id == id)
                .map(|service| service.name.clone())
                .unwrap_or_default()
        })
        .filter(|name| !name.is_empty())
        .collect();

    SelectedServices {
        selected_services: selected.to_vec(),
        service_names,
    }
}

/// The studio's four services, as configured in the widget.
pub fn default_services() -> Vec<Service> {
    let service = |id: &str, name: &str, icon: &str, description: &str, price: &str| Service {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
        price: price.to_string(),
        is_premium: false,
    };

    vec![
        service(
            "360-booth",
            "360 Booth",
            "📸",
            "Immersive 360° video experience for events and brand activations",
            "€100/hr OR €350 for 5hr",
        ),
        service(
            "photography",
            "Photography",
            "📷",
            "Professional photography for products, fashion, and portraits",
            "€100+",
        ),
        service(
            "videography",
            "Videography",
            "🎥",
            "High-quality video production for events and brand content",
            "€100+",
        ),
        Service {
            is_premium: true,
            ..service(
                "touchplus",
                "Touch+",
                "✨",
                "Premium subscription service for monthly content creation",
                "€250/mo",
            )
        },
    ]
}

/// Immutable configuration assembled once at startup and passed by reference.
#[derive(Debug, Clone)]
pub struct BookingConfig {
    pub hours: BusinessHours,
    pub services: Vec<Service>,
    pub fetch_times_webhook: String,
    pub submit_booking_webhook: String,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            hours: BusinessHours::default(),
            services: default_services(),
            fetch_times_webhook: FETCH_TIMES_WEBHOOK.to_string(),
            submit_booking_webhook: SUBMIT_BOOKING_WEBHOOK.to_string(),
        }
    }
}
