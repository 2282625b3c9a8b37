//! Decoding of recorded API payloads.

use paytypes_core::api_errors::{ApiErrorType, ErrorResponse};
use paytypes_core::balance::Balance;
use paytypes_core::coupon::{Coupon, CouponDuration, CouponOrDeleted};
use paytypes_core::customer::{Customer, CustomerOrDeleted, DeletedCustomer};
use paytypes_core::event::{Event, EventObject, EventType};
use paytypes_core::refund::{Refund, RefundStatus};
use paytypes_core::tax::{TaxRate, TaxType};
use paytypes_core::{Error, Expandable, HasId, List, MaybeNull, decode_str};
use pretty_assertions::assert_eq;
use serde_json::Value;

const COUPON: &str = include_str!("fixtures/coupon.json");
const DELETED_CUSTOMER: &str = include_str!("fixtures/deleted_customer.json");
const EMPTY_LIST: &str = include_str!("fixtures/empty_list.json");
const REFUND: &str = include_str!("fixtures/refund.json");
const TAX_RATE: &str = include_str!("fixtures/tax_rate.json");
const BALANCE: &str = include_str!("fixtures/balance.json");
const EVENT: &str = include_str!("fixtures/event_refund_updated.json");
const CARD_ERROR: &str = include_str!("fixtures/card_error.json");

/// Decode, re-encode and compare against the original JSON.
fn assert_round_trip<T>(json: &str) -> T
where
    T: serde::de::DeserializeOwned + serde::Serialize,
{
    let original: Value = serde_json::from_str(json).expect("fixture is JSON");
    let decoded: T = serde_json::from_value(original.clone()).expect("decode");
    let encoded = serde_json::to_value(&decoded).expect("encode");
    assert_eq!(encoded, original);
    decoded
}

#[test]
fn test_minimal_coupon() {
    let coupon: Coupon = assert_round_trip(COUPON);
    assert_eq!(coupon.duration, CouponDuration::Once);
    assert!(coupon.amount_off.is_absent());
    assert!(coupon.metadata.is_absent());
    assert!(!coupon.is_amount_off());
}

#[test]
fn test_coupon_rejects_unlisted_duration() {
    let weekly = COUPON.replace("\"once\"", "\"weekly\"");
    let err = serde_json::from_str::<Coupon>(&weekly).unwrap_err();
    assert!(err.to_string().contains("unknown variant `weekly`"));
}

#[test]
fn test_coupon_rejects_other_discriminant() {
    let err = decode_str::<Customer>(COUPON).unwrap_err();
    assert!(matches!(err, Error::UnexpectedObject { .. }));

    let renamed = COUPON.replace("\"coupon\"", "\"customer\"");
    assert!(serde_json::from_str::<Coupon>(&renamed).is_err());
}

#[test]
fn test_deleted_customer_in_unions() {
    let stub: DeletedCustomer = assert_round_trip(DELETED_CUSTOMER);
    assert_eq!(stub.id(), "cus_NffrFeUfNV2Hib");

    let either: CustomerOrDeleted = serde_json::from_str(DELETED_CUSTOMER).unwrap();
    assert!(either.is_deleted());

    let coupon_or_deleted = serde_json::from_str::<CouponOrDeleted>(DELETED_CUSTOMER);
    assert!(coupon_or_deleted.is_err());
}

#[test]
fn test_empty_list_for_any_element() {
    let refunds: List<Refund> = assert_round_trip(EMPTY_LIST);
    assert!(refunds.is_empty());

    let coupons: List<Coupon> = serde_json::from_str(EMPTY_LIST).unwrap();
    assert_eq!(coupons.len(), 0);
    assert!(!coupons.has_more);

    let events: List<Event> = serde_json::from_str(EMPTY_LIST).unwrap();
    assert_eq!(events.url, "");
}

#[test]
fn test_refund_with_unexpanded_references() {
    let refund: Refund = assert_round_trip(REFUND);
    assert_eq!(refund.status, MaybeNull::Value(RefundStatus::Succeeded));
    assert!(refund.reason.is_null());

    let charge = refund.charge.as_option().unwrap();
    assert!(!charge.is_object());
    assert_eq!(charge.id(), "ch_1NirD82eZvKYlo2CIvbtLWuY");
    assert!(matches!(
        refund.payment_intent,
        MaybeNull::Value(Expandable::Id(ref id)) if id == "pi_1GszsK2eZvKYlo2CfhZyoZLp"
    ));
}

#[test]
fn test_refund_nullable_fields_may_be_omitted() {
    let mut payload: Value = serde_json::from_str(REFUND).unwrap();
    payload.as_object_mut().unwrap().remove("receipt_number");
    let refund: Refund = serde_json::from_value(payload.clone()).unwrap();
    assert!(refund.receipt_number.is_absent());
    assert_eq!(serde_json::to_value(&refund).unwrap(), payload);
}

#[test]
fn test_refund_rejects_null_for_optional_field() {
    let mut payload: Value = serde_json::from_str(REFUND).unwrap();
    payload["description"] = Value::Null;
    assert!(serde_json::from_value::<Refund>(payload).is_err());
}

#[test]
fn test_tax_rate() {
    let rate: TaxRate = assert_round_trip(TAX_RATE);
    assert_eq!(rate.tax_type, MaybeNull::Value(TaxType::Vat));
    assert_eq!(rate.exclusive_tax_on(1000), Some(160));
}

#[test]
fn test_balance_without_id() {
    let balance: Balance = assert_round_trip(BALANCE);
    assert_eq!(balance.available_in("USD"), Some(666670));
    assert!(balance.instant_available.is_none());
}

#[test]
fn test_event_with_refund() {
    let event: Event = assert_round_trip(EVENT);
    assert_eq!(event.type_, EventType::ChargeRefundUpdated);
    assert_eq!(event.type_.resource(), "charge");
    assert!(!event.from_api_request());

    let EventObject::Refund(refund) = event.object() else {
        panic!("expected a refund, got {}", event.object().object());
    };
    assert_eq!(refund.status, MaybeNull::Value(RefundStatus::Pending));
    assert!(refund.metadata.is_null());
}

#[test]
fn test_card_error_response() {
    let response: ErrorResponse = assert_round_trip(CARD_ERROR);
    assert_eq!(response.error.type_, ApiErrorType::CardError);
    assert_eq!(response.error.decline_code.as_deref(), Some("generic_decline"));
}
