//! Wire-shape tests for the public types: orders, modifications, envelopes.

use rust_decimal_macros::dec;
use serde_json::json;
use xts_sdk::prelude::*;
use xts_sdk::shared::decode_envelope;

fn sample_order() -> Order {
    OrderBuilder::new()
        .exchange_segment(ExchangeSegment::BseCm)
        .exchange_instrument_id(500325)
        .product_type(ProductType::Cnc)
        .order_type(OrderType::StopLimit)
        .sell()
        .time_in_force(TimeInForce::Ioc)
        .order_quantity(25)
        .disclosed_quantity(5)
        .limit_price(dec!(2450.5))
        .stop_price(dec!(2451.25))
        .order_uid("wire-1")
        .build(AccountKind::Dealer, "D1")
        .unwrap()
}

#[test]
fn test_order_round_trip_keeps_prices() {
    let mut order = sample_order();
    order.app_order_id = Some(AppOrderId::new(42));

    let json = serde_json::to_string(&order).unwrap();
    let back: Order = serde_json::from_str(&json).unwrap();

    assert_eq!(back.limit_price, dec!(2450.5));
    assert_eq!(back.stop_price, dec!(2451.25));
    assert_eq!(back.app_order_id, Some(AppOrderId::new(42)));
    assert_eq!(back, order);
}

#[test]
fn test_order_decode_accepts_float_quantities() {
    let order: Order = serde_json::from_value(json!({
        "orderUID": "u",
        "exchangeSegment": "NSECM",
        "exchangeInstrumentID": 2885,
        "productType": "MIS",
        "orderType": "MARKET",
        "orderSide": "BUY",
        "timeInForce": "DAY",
        "limitPrice": 0.0,
        "stopPrice": 0.0,
        "orderQuantity": 10.0,
        "disclosedQuantity": 0,
        "appOrderID": 77.0
    }))
    .unwrap();
    assert_eq!(order.order_quantity, 10);
    assert_eq!(order.app_order_id, Some(AppOrderId::new(77)));
    assert!(order.client_id.is_none());
    assert_eq!(order.status, OrderStatus::Created);
}

#[test]
fn test_order_rejects_unknown_segment() {
    let mut value = serde_json::to_value(sample_order()).unwrap();
    value["exchangeSegment"] = json!("NYSE");
    assert!(serde_json::from_value::<Order>(value).is_err());
}

#[test]
fn test_modification_params_from_map() {
    let params = ModificationParams::try_from(json!({
        "modifiedOrderQuantity": 100.0,
        "modifiedLimitPrice": 101.5,
        "modifiedOrderUID": "new-tag"
    }))
    .unwrap();
    assert_eq!(params.modified_order_quantity, Some(100));
    assert_eq!(params.modified_limit_price, Some(dec!(101.5)));
    assert_eq!(params.modified_order_uid.as_deref(), Some("new-tag"));
    assert!(!params.is_empty());
}

#[test]
fn test_empty_modification_serializes_to_empty_object() {
    let params = ModificationParams::new();
    assert!(params.is_empty());
    assert_eq!(serde_json::to_value(&params).unwrap(), json!({}));
}

#[test]
fn test_envelope_missing_result_is_decode_error() {
    let err = decode_envelope::<serde_json::Value>(r#"{"type":"success"}"#).unwrap_err();
    assert!(matches!(err, HttpError::Decode(_)));
}

#[test]
fn test_envelope_generic_payload() {
    let env = decode_envelope::<UserProfile>(
        r#"{"type":"success","result":{"ClientName":"A","PAN":"P"}}"#,
    )
    .unwrap();
    assert_eq!(env.kind, "success");
    assert_eq!(env.into_result().pan, "P");
}
