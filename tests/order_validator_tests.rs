use order_events::models::OrderPayload;
use order_events::services::order_validator::{self, ValidationError};
use serde_json::{json, Value};

fn payload(value: Value) -> OrderPayload {
    match value {
        Value::Object(map) => OrderPayload::from(map),
        other => panic!("test payload must be an object, got {other}"),
    }
}

fn valid_order() -> Value {
    json!({
        "order_id": "O1",
        "customer_id": "C1",
        "items": [
            { "sku": "A", "name": "Widget", "qty": 2, "unit_price": 5.0 }
        ],
        "order_date": "2024-01-01",
        "shipping_address": {
            "line1": "1 Main",
            "city": "X",
            "state": "Y",
            "postal_code": "00000",
            "country": "US"
        },
        "payment_method": "card",
        "total_amount": 10.0
    })
}

fn reason(value: Value) -> String {
    order_validator::validate(payload(value))
        .expect_err("payload should be rejected")
        .to_string()
}

#[test]
fn valid_payload_passes() {
    let order = order_validator::validate(payload(valid_order())).unwrap();

    assert_eq!(order.order_id, json!("O1"));
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].qty, 2);
    assert_eq!(order.payment_method, "card");
    assert_eq!(order.computed_total(), 10.0);
}

#[test]
fn multiple_items_and_integer_total_pass() {
    let mut body = valid_order();
    body["items"] = json!([
        { "sku": "A", "name": "Widget", "qty": 2, "unit_price": 9.99 },
        { "sku": "B", "name": "Gadget", "qty": 1, "unit_price": 0 }
    ]);
    body["total_amount"] = json!(19.98);
    assert!(order_validator::validate(payload(body)).is_ok());

    let mut body = valid_order();
    body["total_amount"] = json!(10);
    assert!(order_validator::validate(payload(body)).is_ok());
}

#[test]
fn missing_fields_are_all_listed() {
    let err = order_validator::validate(payload(json!({ "order_id": "O1" }))).unwrap_err();

    assert_eq!(
        err,
        ValidationError::MissingFields(vec![
            "customer_id",
            "items",
            "order_date",
            "shipping_address",
            "payment_method",
            "total_amount",
        ])
    );
    assert_eq!(
        err.to_string(),
        "Missing fields: ['customer_id', 'items', 'order_date', 'shipping_address', 'payment_method', 'total_amount']"
    );
}

#[test]
fn single_missing_field_is_named() {
    let mut body = valid_order();
    body.as_object_mut().unwrap().remove("payment_method");

    assert_eq!(reason(body), "Missing fields: ['payment_method']");
}

#[test]
fn items_must_be_a_non_empty_list() {
    let mut body = valid_order();
    body["items"] = json!([]);
    assert_eq!(reason(body), "`items` must be a non-empty list");

    let mut body = valid_order();
    body["items"] = json!({ "sku": "A" });
    assert_eq!(reason(body), "`items` must be a non-empty list");
}

#[test]
fn item_missing_key_names_index_and_key() {
    let mut body = valid_order();
    body["items"] = json!([
        { "sku": "A", "name": "Widget", "qty": 2, "unit_price": 5.0 },
        { "sku": "B", "qty": 1, "unit_price": 1.0 }
    ]);

    assert_eq!(reason(body), "Item[1] missing 'name'");
}

#[test]
fn non_object_item_is_rejected() {
    let mut body = valid_order();
    body["items"] = json!([42]);

    assert_eq!(reason(body), "Item[0] must be an object");
}

#[test]
fn qty_must_be_a_positive_integer() {
    for bad in [json!(0), json!(-1), json!(2.5), json!("2"), json!(null)] {
        let mut body = valid_order();
        body["items"][0]["qty"] = bad.clone();
        assert_eq!(
            reason(body),
            "Item[0].qty must be a positive integer",
            "qty {bad} should be rejected"
        );
    }
}

#[test]
fn qty_error_references_the_offending_index() {
    let mut body = valid_order();
    body["items"] = json!([
        { "sku": "A", "name": "Widget", "qty": 2, "unit_price": 5.0 },
        { "sku": "B", "name": "Gadget", "qty": 0, "unit_price": 1.0 }
    ]);

    assert_eq!(
        order_validator::validate(payload(body)).unwrap_err(),
        ValidationError::InvalidQty(1)
    );
}

#[test]
fn unit_price_must_be_non_negative_number() {
    for bad in [json!(-0.01), json!("5.0"), json!(null)] {
        let mut body = valid_order();
        body["items"][0]["unit_price"] = bad;
        assert_eq!(reason(body), "Item[0].unit_price must be non-negative number");
    }
}

#[test]
fn shipping_address_must_be_complete_object() {
    let mut body = valid_order();
    body["shipping_address"] = json!("1 Main, X");
    assert_eq!(reason(body), "`shipping_address` must be an object");

    let mut body = valid_order();
    body["shipping_address"].as_object_mut().unwrap().remove("postal_code");
    assert_eq!(reason(body), "`shipping_address` missing 'postal_code'");
}

#[test]
fn payment_method_must_be_string() {
    let mut body = valid_order();
    body["payment_method"] = json!(7);

    assert_eq!(reason(body), "`payment_method` must be a string");
}

#[test]
fn total_amount_must_be_number() {
    let mut body = valid_order();
    body["total_amount"] = json!("10.00");

    assert_eq!(reason(body), "`total_amount` must be a number");
}

#[test]
fn total_mismatch_reports_both_values() {
    let mut body = valid_order();
    body["total_amount"] = json!(11.0);

    let msg = reason(body);
    assert!(msg.contains("expected 10.00, got 11.00"), "got: {msg}");
}

#[test]
fn off_by_a_cent_is_a_mismatch() {
    let mut body = valid_order();
    body["total_amount"] = json!(10.01);

    assert_eq!(reason(body), "total_amount mismatch: expected 10.00, got 10.01");
}

#[test]
fn sub_cent_rounding_noise_passes() {
    let mut body = valid_order();
    body["items"] = json!([{ "sku": "A", "name": "Widget", "qty": 1, "unit_price": 19.975 }]);
    body["total_amount"] = json!(19.98);
    assert!(order_validator::validate(payload(body)).is_ok());

    let mut body = valid_order();
    body["items"] = json!([{ "sku": "A", "name": "Widget", "qty": 3, "unit_price": 0.1 }]);
    body["total_amount"] = json!(0.3);
    assert!(order_validator::validate(payload(body)).is_ok());
}

#[test]
fn structural_checks_run_before_arithmetic() {
    let mut body = valid_order();
    body["items"][0]["qty"] = json!(0);
    body["total_amount"] = json!(999.0);

    assert_eq!(reason(body), "Item[0].qty must be a positive integer");
}

#[test]
fn unknown_keys_are_kept() {
    let mut body = valid_order();
    body["coupon"] = json!("SPRING");
    body["items"][0]["color"] = json!("red");

    let order = order_validator::validate(payload(body)).unwrap();
    assert_eq!(order.extra.get("coupon"), Some(&json!("SPRING")));
    assert_eq!(order.items[0].extra.get("color"), Some(&json!("red")));
}

#[test]
fn half_cent_tie_rounds_to_even() {
    let mut body = valid_order();
    body["items"] = json!([{ "sku": "A", "name": "Widget", "qty": 1, "unit_price": 0.125 }]);
    body["total_amount"] = json!(0.12);
    assert!(order_validator::validate(payload(body)).is_ok());

    let mut body = valid_order();
    body["items"] = json!([{ "sku": "A", "name": "Widget", "qty": 1, "unit_price": 0.125 }]);
    body["total_amount"] = json!(0.13);
    assert_eq!(reason(body), "total_amount mismatch: expected 0.12, got 0.13");
}

#[test]
fn round2_matches_two_decimal_rounding() {
    assert_eq!(order_validator::round2(0.125), 0.12);
    assert_eq!(order_validator::round2(0.375), 0.38);
    assert_eq!(order_validator::round2(19.975), 19.98);
    assert_eq!(order_validator::round2(2.675), 2.67);
    assert_eq!(order_validator::round2(0.1 * 3.0), 0.3);
}
