use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{EnrichedOrder, Order};

/// `2024-01-01T12:30:45.123456Z`: always six fractional digits, literal `Z`.
pub const PROCESSED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

pub fn new_processing_id() -> String {
    Uuid::new_v4().simple().to_string()
}

pub fn format_processed_at(at: DateTime<Utc>) -> String {
    at.format(PROCESSED_AT_FORMAT).to_string()
}

/// Attaches a fresh processing id and the current UTC time to a validated order.
pub fn enrich(order: Order) -> EnrichedOrder {
    enrich_at(order, Utc::now())
}

pub fn enrich_at(mut order: Order, at: DateTime<Utc>) -> EnrichedOrder {
    // server-owned keys win over anything the client sent under the same name
    order.extra.remove("processing_id");
    order.extra.remove("processed_at");

    let processing_id = new_processing_id();
    tracing::info!("Enriched payload: processing_id={}", processing_id);

    EnrichedOrder {
        order,
        processing_id,
        processed_at: format_processed_at(at),
    }
}
