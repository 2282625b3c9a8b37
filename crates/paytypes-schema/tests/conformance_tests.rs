//! Conformance checks of recorded payloads against the standard registry.

use paytypes_core::account::{Account, DeletedAccount, DeletedPerson, Person};
use paytypes_core::balance::{Balance, BalanceTransaction};
use paytypes_core::bank_account::{BankAccount, DeletedBankAccount};
use paytypes_core::card::{Card, DeletedCard};
use paytypes_core::charge::{Charge, Review};
use paytypes_core::checkout::{CheckoutSession, LineItem};
use paytypes_core::coupon::{Coupon, DeletedCoupon};
use paytypes_core::credit_note::{CreditNote, CreditNoteLineItem};
use paytypes_core::customer::{
    CashBalance, Customer, CustomerBalanceTransaction, DeletedCustomer,
};
use paytypes_core::discount::{DeletedDiscount, Discount, PromotionCode};
use paytypes_core::dispute::Dispute;
use paytypes_core::event::Event;
use paytypes_core::file::{File, FileLink};
use paytypes_core::invoice::{
    DeletedInvoice, DeletedInvoiceItem, Invoice, InvoiceItem, InvoiceLineItem,
};
use paytypes_core::issuing::{
    IssuingAuthorization, IssuingCard, IssuingCardholder, IssuingDispute,
    IssuingTransaction,
};
use paytypes_core::mandate::Mandate;
use paytypes_core::object::{is_deleted, object_of};
use paytypes_core::payment_intent::PaymentIntent;
use paytypes_core::payment_method::PaymentMethod;
use paytypes_core::payout::Payout;
use paytypes_core::price::{
    DeletedPlan, DeletedPrice, DeletedProduct, Plan, Price, Product,
};
use paytypes_core::refund::Refund;
use paytypes_core::setup_intent::{SetupAttempt, SetupIntent};
use paytypes_core::source::Source;
use paytypes_core::subscription::{
    DeletedSubscriptionItem, Subscription, SubscriptionItem, SubscriptionSchedule,
};
use paytypes_core::tax::{DeletedTaxId, TaxCode, TaxId, TaxRate};
use paytypes_core::transfer::{
    Application, ApplicationFee, FeeRefund, Transfer, TransferReversal,
};
use paytypes_schema::{ObjectRegistry, PayloadValidator, export_all, schema_for_object};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::path::Path;

const COUPON: &str = include_str!("../../paytypes-core/tests/fixtures/coupon.json");
const DELETED_CUSTOMER: &str =
    include_str!("../../paytypes-core/tests/fixtures/deleted_customer.json");
const REFUND: &str = include_str!("../../paytypes-core/tests/fixtures/refund.json");
const TAX_RATE: &str = include_str!("../../paytypes-core/tests/fixtures/tax_rate.json");
const BALANCE: &str = include_str!("../../paytypes-core/tests/fixtures/balance.json");
const EVENT: &str = include_str!("../../paytypes-core/tests/fixtures/event_refund_updated.json");
const MINIMAL_DIR: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/../paytypes-core/tests/fixtures/minimal");

#[rstest]
#[case::coupon(COUPON, "Coupon")]
#[case::deleted_customer(DELETED_CUSTOMER, "DeletedCustomer")]
#[case::refund(REFUND, "Refund")]
#[case::tax_rate(TAX_RATE, "TaxRate")]
#[case::balance(BALANCE, "Balance")]
#[case::event(EVENT, "Event")]
fn test_fixture_is_clean(#[case] json: &str, #[case] type_name: &str) {
    let validator = PayloadValidator::standard();
    let report = validator.validate_str(json);

    assert!(report.is_clean(), "{type_name}: {:?}", report);
    assert_eq!(report.type_name, type_name);
}

fn reencode<T: DeserializeOwned + Serialize>(payload: &Value) -> Value {
    let decoded: T = serde_json::from_value(payload.clone()).unwrap();
    serde_json::to_value(decoded).unwrap()
}

/// Every registered shape with only its required keys: validates clean,
/// survives a round trip and is rejected once its discriminant changes.
#[rstest]
#[case::account("account.json", reencode::<Account>)]
#[case::deleted_account("deleted_account.json", reencode::<DeletedAccount>)]
#[case::application("application.json", reencode::<Application>)]
#[case::application_fee("application_fee.json", reencode::<ApplicationFee>)]
#[case::balance("balance.json", reencode::<Balance>)]
#[case::balance_transaction("balance_transaction.json", reencode::<BalanceTransaction>)]
#[case::bank_account("bank_account.json", reencode::<BankAccount>)]
#[case::deleted_bank_account("deleted_bank_account.json", reencode::<DeletedBankAccount>)]
#[case::card("card.json", reencode::<Card>)]
#[case::deleted_card("deleted_card.json", reencode::<DeletedCard>)]
#[case::cash_balance("cash_balance.json", reencode::<CashBalance>)]
#[case::charge("charge.json", reencode::<Charge>)]
#[case::checkout_session("checkout.session.json", reencode::<CheckoutSession>)]
#[case::coupon("coupon.json", reencode::<Coupon>)]
#[case::deleted_coupon("deleted_coupon.json", reencode::<DeletedCoupon>)]
#[case::credit_note("credit_note.json", reencode::<CreditNote>)]
#[case::credit_note_line_item("credit_note_line_item.json", reencode::<CreditNoteLineItem>)]
#[case::customer("customer.json", reencode::<Customer>)]
#[case::deleted_customer("deleted_customer.json", reencode::<DeletedCustomer>)]
#[case::customer_balance_transaction("customer_balance_transaction.json", reencode::<CustomerBalanceTransaction>)]
#[case::discount("discount.json", reencode::<Discount>)]
#[case::deleted_discount("deleted_discount.json", reencode::<DeletedDiscount>)]
#[case::dispute("dispute.json", reencode::<Dispute>)]
#[case::event("event.json", reencode::<Event>)]
#[case::fee_refund("fee_refund.json", reencode::<FeeRefund>)]
#[case::file("file.json", reencode::<File>)]
#[case::file_link("file_link.json", reencode::<FileLink>)]
#[case::invoice("invoice.json", reencode::<Invoice>)]
#[case::deleted_invoice("deleted_invoice.json", reencode::<DeletedInvoice>)]
#[case::invoiceitem("invoiceitem.json", reencode::<InvoiceItem>)]
#[case::deleted_invoiceitem("deleted_invoiceitem.json", reencode::<DeletedInvoiceItem>)]
#[case::line_item("line_item.json", reencode::<InvoiceLineItem>)]
#[case::issuing_authorization("issuing.authorization.json", reencode::<IssuingAuthorization>)]
#[case::issuing_card("issuing.card.json", reencode::<IssuingCard>)]
#[case::issuing_cardholder("issuing.cardholder.json", reencode::<IssuingCardholder>)]
#[case::issuing_dispute("issuing.dispute.json", reencode::<IssuingDispute>)]
#[case::issuing_transaction("issuing.transaction.json", reencode::<IssuingTransaction>)]
#[case::item("item.json", reencode::<LineItem>)]
#[case::mandate("mandate.json", reencode::<Mandate>)]
#[case::payment_intent("payment_intent.json", reencode::<PaymentIntent>)]
#[case::payment_method("payment_method.json", reencode::<PaymentMethod>)]
#[case::payout("payout.json", reencode::<Payout>)]
#[case::person("person.json", reencode::<Person>)]
#[case::deleted_person("deleted_person.json", reencode::<DeletedPerson>)]
#[case::plan("plan.json", reencode::<Plan>)]
#[case::deleted_plan("deleted_plan.json", reencode::<DeletedPlan>)]
#[case::price("price.json", reencode::<Price>)]
#[case::deleted_price("deleted_price.json", reencode::<DeletedPrice>)]
#[case::product("product.json", reencode::<Product>)]
#[case::deleted_product("deleted_product.json", reencode::<DeletedProduct>)]
#[case::promotion_code("promotion_code.json", reencode::<PromotionCode>)]
#[case::refund("refund.json", reencode::<Refund>)]
#[case::review("review.json", reencode::<Review>)]
#[case::setup_attempt("setup_attempt.json", reencode::<SetupAttempt>)]
#[case::setup_intent("setup_intent.json", reencode::<SetupIntent>)]
#[case::source("source.json", reencode::<Source>)]
#[case::subscription("subscription.json", reencode::<Subscription>)]
#[case::subscription_item("subscription_item.json", reencode::<SubscriptionItem>)]
#[case::deleted_subscription_item("deleted_subscription_item.json", reencode::<DeletedSubscriptionItem>)]
#[case::subscription_schedule("subscription_schedule.json", reencode::<SubscriptionSchedule>)]
#[case::tax_code("tax_code.json", reencode::<TaxCode>)]
#[case::tax_id("tax_id.json", reencode::<TaxId>)]
#[case::deleted_tax_id("deleted_tax_id.json", reencode::<DeletedTaxId>)]
#[case::tax_rate("tax_rate.json", reencode::<TaxRate>)]
#[case::transfer("transfer.json", reencode::<Transfer>)]
#[case::transfer_reversal("transfer_reversal.json", reencode::<TransferReversal>)]
fn test_minimal_payload(#[case] file: &str, #[case] reencode_as: fn(&Value) -> Value) {
    let text = std::fs::read_to_string(Path::new(MINIMAL_DIR).join(file)).unwrap();
    let payload: Value = serde_json::from_str(&text).unwrap();
    let validator = PayloadValidator::standard();

    let report = validator.validate_object(&payload);
    assert!(report.is_clean(), "{file}: {:?}", report);
    assert_eq!(reencode_as(&payload), payload, "{file}");

    let object = object_of(&payload).unwrap().to_string();
    let mut renamed = payload.clone();
    renamed["object"] = json!("quote");
    let report = validator.validate_as(&object, is_deleted(&payload), &renamed);
    assert_eq!(report.errors[0].path, "/object", "{file}");
}

#[rstest]
#[case("forever")]
#[case("once")]
#[case("repeating")]
fn test_every_duration_literal_accepted(#[case] duration: &str) {
    let mut payload: Value = serde_json::from_str(COUPON).unwrap();
    payload["duration"] = json!(duration);

    let report = PayloadValidator::standard().validate::<Coupon>(&payload);
    assert!(report.is_valid(), "{:?}", report.errors);
}

#[test]
fn test_weekly_duration_rejected() {
    let mut payload: Value = serde_json::from_str(COUPON).unwrap();
    payload["duration"] = json!("weekly");

    let report = PayloadValidator::standard().validate::<Coupon>(&payload);
    assert!(!report.is_valid());
}

#[test]
fn test_changed_discriminant_rejected() {
    let mut payload: Value = serde_json::from_str(COUPON).unwrap();
    payload["object"] = json!("customer");

    let validator = PayloadValidator::standard();
    assert!(!validator.validate::<Coupon>(&payload).is_valid());
    assert!(!validator.validate_object(&payload).is_valid());
}

#[test]
fn test_nested_unknown_field_in_event_object() {
    let mut payload: Value = serde_json::from_str(EVENT).unwrap();
    payload["data"]["object"]["sparkle"] = json!(1);

    let report = PayloadValidator::standard().validate_object(&payload);
    assert!(report.is_valid(), "{:?}", report.errors);
    assert_eq!(report.warnings, vec!["/data/object/sparkle: unknown field".to_string()]);
}

#[test]
fn test_required_nullable_omission_rejected() {
    let mut payload: Value = serde_json::from_str(EVENT).unwrap();
    payload["request"]
        .as_object_mut()
        .unwrap()
        .remove("idempotency_key");

    let report = PayloadValidator::standard().validate_object(&payload);
    assert!(!report.is_valid());
    assert!(report.errors[0].message.contains("idempotency_key"));
}

#[test]
fn test_nullable_object_field_omission_accepted() {
    let mut payload: Value = serde_json::from_str(TAX_RATE).unwrap();
    payload.as_object_mut().unwrap().remove("jurisdiction");

    let report = PayloadValidator::standard().validate_object(&payload);
    assert!(report.is_clean(), "{:?}", report);
}

#[test]
fn test_standard_schemas_export() {
    let registry = ObjectRegistry::standard();
    let dir = tempfile::tempdir().unwrap();

    let written = export_all(&registry, dir.path()).unwrap();
    assert_eq!(written, registry.len());
    assert!(dir.path().join("checkout.session.json").exists());
    assert!(dir.path().join("deleted_customer.json").exists());

    let schema = schema_for_object(&registry, "event", false).unwrap();
    let json = serde_json::to_value(schema).unwrap();
    assert_eq!(json["properties"]["object"]["const"], "event");
}
