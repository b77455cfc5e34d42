//! Benchmark the webhook parse path over a realistically busy payload.

use std::hint::black_box;

use chrono::{TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};
use slot_engine::{parse_webhook_time_slots, BusinessHours};

/// A month of bookings: 30 days x 10 events across the service catalog.
fn busy_payload() -> Value {
    let services = ["360-booth", "photography", "videography", "touchplus"];
    let events: Vec<Value> = (0..30usize)
        .flat_map(|day| {
            (0..10usize).map(move |i| {
                json!({
                    "start": {
                        "dateTime": format!("2024-03-{:02}T{:02}:{:02}:00Z", day + 1, 9 + i, (i % 2) * 30),
                    },
                    "serviceId": services[(day + i) % services.len()],
                })
            })
        })
        .collect();
    Value::Array(events)
}

fn bench_parse(c: &mut Criterion) {
    let hours = BusinessHours::default();
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap();
    let payload = busy_payload();

    c.bench_function("parse_webhook_time_slots/300-events", |b| {
        b.iter(|| {
            parse_webhook_time_slots(
                black_box(&payload),
                black_box("2024-03-18"),
                black_box("360-booth"),
                &hours,
                now,
            )
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
