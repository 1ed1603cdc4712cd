use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::{LineItem, Order, OrderPayload};

pub const REQUIRED_FIELDS: [&str; 7] = [
    "order_id",
    "customer_id",
    "items",
    "order_date",
    "shipping_address",
    "payment_method",
    "total_amount",
];

pub const ITEM_FIELDS: [&str; 4] = ["sku", "name", "qty", "unit_price"];

pub const ADDRESS_FIELDS: [&str; 5] = ["line1", "city", "state", "postal_code", "country"];

/// First structural or arithmetic defect found in a payload.
///
/// The `Display` text is returned to the caller verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Missing fields: [{}]", quoted_list(.0))]
    MissingFields(Vec<&'static str>),
    #[error("`items` must be a non-empty list")]
    EmptyItems,
    #[error("Item[{0}] must be an object")]
    ItemNotObject(usize),
    #[error("Item[{index}] missing '{key}'")]
    ItemMissingKey { index: usize, key: &'static str },
    #[error("Item[{0}].qty must be a positive integer")]
    InvalidQty(usize),
    #[error("Item[{0}].unit_price must be non-negative number")]
    InvalidUnitPrice(usize),
    #[error("`shipping_address` must be an object")]
    AddressNotObject,
    #[error("`shipping_address` missing '{0}'")]
    AddressMissingField(&'static str),
    #[error("`payment_method` must be a string")]
    PaymentMethodNotString,
    #[error("`total_amount` must be a number")]
    TotalNotNumber,
    #[error("total_amount mismatch: expected {computed:.2}, got {given:.2}")]
    TotalMismatch { computed: f64, given: f64 },
}

fn quoted_list(names: &[&str]) -> String {
    names
        .iter()
        .map(|n| format!("'{n}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rounds to cents the way the totals are compared: sub-cent drift is
/// tolerated, anything larger is a mismatch.
///
/// Goes through the correctly rounded two-decimal text of the exact binary
/// value, so exact half-cent ties round to even (`0.125` becomes `0.12`).
pub fn round2(v: f64) -> f64 {
    format!("{v:.2}").parse().unwrap_or(v)
}

pub fn validate(payload: OrderPayload) -> Result<Order, ValidationError> {
    let missing: Vec<&'static str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|f| !payload.contains_key(f))
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    let mut fields = payload.into_fields();
    // presence was checked above
    let mut take = |key: &str| fields.remove(key).unwrap_or(Value::Null);

    let order_id = take("order_id");
    let customer_id = take("customer_id");
    let raw_items = take("items");
    let order_date = take("order_date");
    let raw_address = take("shipping_address");
    let raw_payment = take("payment_method");
    let raw_total = take("total_amount");

    let items = validate_items(raw_items)?;
    let shipping_address = validate_address(raw_address)?;

    let Value::String(payment_method) = raw_payment else {
        return Err(ValidationError::PaymentMethodNotString);
    };

    let Value::Number(total_amount) = raw_total else {
        return Err(ValidationError::TotalNotNumber);
    };

    let order = Order {
        order_id,
        customer_id,
        items,
        order_date,
        shipping_address,
        payment_method,
        total_amount,
        extra: fields,
    };

    let computed = order.computed_total();
    let given = order.total_amount.as_f64().unwrap_or(f64::NAN);
    if round2(computed) != round2(given) {
        return Err(ValidationError::TotalMismatch { computed, given });
    }

    tracing::info!("Payload validated for order {}", order.display_id());
    Ok(order)
}

fn validate_items(raw: Value) -> Result<Vec<LineItem>, ValidationError> {
    let list = match raw {
        Value::Array(list) if !list.is_empty() => list,
        _ => return Err(ValidationError::EmptyItems),
    };

    list.into_iter()
        .enumerate()
        .map(|(index, raw_item)| validate_item(index, raw_item))
        .collect()
}

fn validate_item(index: usize, raw: Value) -> Result<LineItem, ValidationError> {
    let Value::Object(mut item) = raw else {
        return Err(ValidationError::ItemNotObject(index));
    };

    if let Some(key) = ITEM_FIELDS.iter().copied().find(|k| !item.contains_key(*k)) {
        return Err(ValidationError::ItemMissingKey { index, key });
    }

    let qty = item
        .get("qty")
        .and_then(Value::as_u64)
        .filter(|q| *q > 0)
        .ok_or(ValidationError::InvalidQty(index))?;

    let unit_price = match item.get("unit_price") {
        Some(Value::Number(n)) if n.as_f64().is_some_and(|p| p >= 0.0) => n.clone(),
        _ => return Err(ValidationError::InvalidUnitPrice(index)),
    };

    let sku = item.remove("sku").unwrap_or(Value::Null);
    let name = item.remove("name").unwrap_or(Value::Null);
    item.remove("qty");
    item.remove("unit_price");

    Ok(LineItem {
        sku,
        name,
        qty,
        unit_price,
        extra: item,
    })
}

fn validate_address(raw: Value) -> Result<Map<String, Value>, ValidationError> {
    let Value::Object(address) = raw else {
        return Err(ValidationError::AddressNotObject);
    };

    match ADDRESS_FIELDS.iter().copied().find(|f| !address.contains_key(*f)) {
        Some(field) => Err(ValidationError::AddressMissingField(field)),
        None => Ok(address),
    }
}
