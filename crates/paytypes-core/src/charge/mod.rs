//! Charges, their risk outcome and manual reviews.

mod details;

pub use details::*;

use crate::account::Account;
use crate::balance::BalanceTransaction;
use crate::common::{BillingDetails, Shipping};
use crate::customer::CustomerOrDeleted;
use crate::expandable::Expandable;
use crate::ids::{ChargeId, ReviewId};
use crate::invoice::Invoice;
use crate::list::List;
use crate::object::{Metadata, Tag, Timestamp};
use crate::payment_intent::PaymentIntent;
use crate::payment_method::RadarOptions;
use crate::presence::{MaybeNull, nullable, present};
use crate::refund::Refund;
use crate::source::PaymentSource;
use crate::transfer::{ApplicationFee, Transfer};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Charge {
    pub id: ChargeId,
    pub object: Tag<Charge>,
    pub amount: i64,
    pub amount_captured: i64,
    pub amount_refunded: i64,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub application: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub application_fee: MaybeNull<Expandable<ApplicationFee>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub application_fee_amount: MaybeNull<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub authorization_code: Option<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub balance_transaction: MaybeNull<Expandable<BalanceTransaction>>,
    pub billing_details: BillingDetails,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub calculated_statement_descriptor: MaybeNull<String>,
    pub captured: bool,
    pub created: Timestamp,
    pub currency: String,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub customer: MaybeNull<Expandable<CustomerOrDeleted>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub description: MaybeNull<String>,
    pub disputed: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub failure_balance_transaction: MaybeNull<Expandable<BalanceTransaction>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub failure_code: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub failure_message: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub fraud_details: MaybeNull<ChargeFraudDetails>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub invoice: MaybeNull<Expandable<Invoice>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub level3: Option<Level3>,
    pub livemode: bool,
    pub metadata: Metadata,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub on_behalf_of: MaybeNull<Expandable<Account>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub outcome: MaybeNull<ChargeOutcome>,
    pub paid: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub payment_intent: MaybeNull<Expandable<PaymentIntent>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub payment_method: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub payment_method_details: MaybeNull<PaymentMethodDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub radar_options: Option<RadarOptions>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub receipt_email: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub receipt_number: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub receipt_url: MaybeNull<String>,
    pub refunded: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub refunds: MaybeNull<List<Refund>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub review: MaybeNull<Expandable<Review>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub shipping: MaybeNull<Shipping>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub source: MaybeNull<PaymentSource>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub source_transfer: MaybeNull<Expandable<Transfer>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub statement_descriptor: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub statement_descriptor_suffix: MaybeNull<String>,
    pub status: ChargeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub transfer: Option<Expandable<Transfer>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub transfer_data: MaybeNull<ChargeTransferData>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub transfer_group: MaybeNull<String>,
}

crate::impl_object!(Charge, "charge", id);

impl Charge {
    /// Amount still available to refund.
    pub fn refundable_amount(&self) -> i64 {
        (self.amount_captured - self.amount_refunded).max(0)
    }
}

literal_enum! {
    pub enum ChargeStatus {
        Failed = "failed",
        Pending = "pending",
        Succeeded = "succeeded",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ChargeFraudDetails {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub stripe_report: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub user_report: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ChargeOutcome {
    #[serde(deserialize_with = "nullable")]
    pub network_status: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub risk_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub risk_score: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub rule: Option<Expandable<RadarRule>>,
    #[serde(deserialize_with = "nullable")]
    pub seller_message: Option<String>,
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RadarRule {
    pub action: String,
    pub id: String,
    pub predicate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ChargeTransferData {
    #[serde(deserialize_with = "nullable")]
    pub amount: Option<i64>,
    pub destination: Expandable<Account>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Level3 {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub customer_reference: Option<String>,
    pub line_items: Vec<Level3LineItem>,
    pub merchant_reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub shipping_address_zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub shipping_amount: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub shipping_from_zip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Level3LineItem {
    #[serde(deserialize_with = "nullable")]
    pub discount_amount: Option<i64>,
    pub product_code: String,
    pub product_description: String,
    #[serde(deserialize_with = "nullable")]
    pub quantity: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub tax_amount: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub unit_cost: Option<i64>,
}

/// A Radar review opened for a charge or payment intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Review {
    pub id: ReviewId,
    pub object: Tag<Review>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub billing_zip: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub charge: MaybeNull<Expandable<Charge>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub closed_reason: MaybeNull<ReviewClosedReason>,
    pub created: Timestamp,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub ip_address: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub ip_address_location: MaybeNull<ReviewIpAddressLocation>,
    pub livemode: bool,
    pub open: bool,
    pub opened_reason: ReviewOpenedReason,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub payment_intent: Option<Expandable<PaymentIntent>>,
    pub reason: String,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub session: MaybeNull<ReviewSession>,
}

crate::impl_object!(Review, "review", id);

literal_enum! {
    pub enum ReviewClosedReason {
        Approved = "approved",
        Disputed = "disputed",
        Redacted = "redacted",
        Refunded = "refunded",
        RefundedAsFraud = "refunded_as_fraud",
    }
}

literal_enum! {
    pub enum ReviewOpenedReason {
        Manual = "manual",
        Rule = "rule",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReviewIpAddressLocation {
    #[serde(deserialize_with = "nullable")]
    pub city: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub country: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub latitude: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    pub longitude: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    pub region: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReviewSession {
    #[serde(deserialize_with = "nullable")]
    pub browser: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub device: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub platform: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_outcome_rule_as_id_or_object() {
        let base = json!({
            "network_status": "approved_by_network",
            "reason": null,
            "seller_message": "Payment complete.",
            "type": "authorized"
        });

        let mut with_id = base.clone();
        with_id["rule"] = json!("rule_1");
        let outcome: ChargeOutcome = serde_json::from_value(with_id).unwrap();
        assert!(!outcome.rule.unwrap().is_object());

        let mut with_object = base;
        with_object["rule"] = json!({"action": "block", "id": "rule_1", "predicate": ":risk_level: = 'highest'"});
        let outcome: ChargeOutcome = serde_json::from_value(with_object).unwrap();
        assert_eq!(outcome.rule.unwrap().as_object().unwrap().action, "block");
    }

    #[test]
    fn test_review_closed_reason_nullable() {
        let review: Review = serde_json::from_value(json!({
            "id": "prv_1",
            "object": "review",
            "billing_zip": null,
            "charge": "ch_1",
            "closed_reason": null,
            "created": 1700000000,
            "ip_address": null,
            "ip_address_location": null,
            "livemode": false,
            "open": true,
            "opened_reason": "rule",
            "reason": "rule",
            "session": null
        }))
        .unwrap();
        assert!(review.open);
        assert_eq!(review.opened_reason, ReviewOpenedReason::Rule);
        assert!(review.closed_reason.is_null());
    }
}
