use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use thiserror::Error;

pub const CONFIRMATION_MESSAGE: &str = "Order received and stored.";

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("request body is empty")]
    Empty,
    #[error("request body is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("request body is not a JSON object")]
    NotAnObject,
    #[error("request body is an empty JSON object")]
    EmptyObject,
    #[error("request body could not be read: {0}")]
    Unreadable(String),
}

/// Raw order-creation event as decoded from the request body.
///
/// Only the outer shape is checked here (a non-empty JSON object); field
/// presence and types are left to the validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderPayload(Map<String, Value>);

impl OrderPayload {
    pub fn decode(body: &[u8]) -> Result<Self, ParseError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(ParseError::Empty);
        }

        match serde_json::from_slice::<Value>(body)? {
            Value::Object(map) if map.is_empty() => Err(ParseError::EmptyObject),
            Value::Object(map) => Ok(Self(map)),
            _ => Err(ParseError::NotAnObject),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for OrderPayload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub sku: Value,
    pub name: Value,
    pub qty: u64,
    pub unit_price: Number,

    // keys the client sent that we don't interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LineItem {
    pub fn subtotal(&self) -> f64 {
        self.qty as f64 * self.unit_price.as_f64().unwrap_or(0.0)
    }
}

/// A payload that passed validation.
///
/// Fields the validator only checks for presence stay as raw JSON values so
/// they are echoed back exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub order_id: Value,
    pub customer_id: Value,
    pub items: Vec<LineItem>,
    pub order_date: Value,
    pub shipping_address: Map<String, Value>,
    pub payment_method: String,
    pub total_amount: Number,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Order {
    pub fn computed_total(&self) -> f64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    /// Order id for log lines (strings without quotes).
    pub fn display_id(&self) -> String {
        match &self.order_id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedOrder {
    #[serde(flatten)]
    pub order: Order,

    pub processing_id: String,
    pub processed_at: String,
}

/// Body of a successful response.
#[derive(Debug, Clone, Serialize)]
pub struct OrderReceipt {
    pub status: &'static str,
    pub order_id: Value,
    pub processing_id: String,
    pub processed_at: String,
    pub items_count: usize,
    pub total_amount: Number,
    pub payment_method: String,
    pub shipping_address: Map<String, Value>,
    pub message: &'static str,
}

impl From<&EnrichedOrder> for OrderReceipt {
    fn from(enriched: &EnrichedOrder) -> Self {
        let order = &enriched.order;
        Self {
            status: "processed",
            order_id: order.order_id.clone(),
            processing_id: enriched.processing_id.clone(),
            processed_at: enriched.processed_at.clone(),
            items_count: order.items.len(),
            total_amount: order.total_amount.clone(),
            payment_method: order.payment_method.clone(),
            shipping_address: order.shipping_address.clone(),
            message: CONFIRMATION_MESSAGE,
        }
    }
}
