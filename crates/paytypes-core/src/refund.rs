//! Refunds of previously created charges.

use crate::balance::BalanceTransaction;
use crate::charge::Charge;
use crate::expandable::Expandable;
use crate::ids::RefundId;
use crate::object::{Metadata, Tag, Timestamp};
use crate::payment_intent::PaymentIntent;
use crate::presence::{MaybeNull, nullable, present};
use crate::transfer::TransferReversal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Refund {
    pub id: RefundId,
    pub object: Tag<Refund>,
    pub amount: i64,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub balance_transaction: MaybeNull<Expandable<BalanceTransaction>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub charge: MaybeNull<Expandable<Charge>>,
    pub created: Timestamp,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub failure_balance_transaction: Option<Expandable<BalanceTransaction>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub failure_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub instructions_email: Option<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub metadata: MaybeNull<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub next_action: Option<RefundNextAction>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub payment_intent: MaybeNull<Expandable<PaymentIntent>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub reason: MaybeNull<RefundReason>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub receipt_number: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub source_transfer_reversal: MaybeNull<Expandable<TransferReversal>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub status: MaybeNull<RefundStatus>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub transfer_reversal: MaybeNull<Expandable<TransferReversal>>,
}

crate::impl_object!(Refund, "refund", id);

literal_enum! {
    pub enum RefundReason {
        Duplicate = "duplicate",
        ExpiredUncapturedCharge = "expired_uncaptured_charge",
        Fraudulent = "fraudulent",
        RequestedByCustomer = "requested_by_customer",
    }
}

literal_enum! {
    pub enum RefundStatus {
        Canceled = "canceled",
        Failed = "failed",
        Pending = "pending",
        RequiresAction = "requires_action",
        Succeeded = "succeeded",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RefundNextAction {
    #[serde(deserialize_with = "nullable")]
    pub display_details: Option<RefundDisplayDetails>,
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RefundDisplayDetails {
    pub email_sent: EmailSent,
    pub expires_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EmailSent {
    pub email_sent_at: Timestamp,
    pub email_sent_to: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn refund_json() -> serde_json::Value {
        json!({
            "id": "re_1",
            "object": "refund",
            "amount": 500,
            "balance_transaction": "txn_1",
            "charge": "ch_1",
            "created": 1680000000,
            "currency": "usd",
            "metadata": {},
            "payment_intent": "pi_1",
            "reason": "requested_by_customer",
            "receipt_number": null,
            "source_transfer_reversal": null,
            "status": "succeeded",
            "transfer_reversal": null
        })
    }

    #[test]
    fn test_refund_decodes() {
        let refund: Refund = serde_json::from_value(refund_json()).unwrap();
        assert_eq!(refund.reason, MaybeNull::Value(RefundReason::RequestedByCustomer));
        assert_eq!(refund.status, MaybeNull::Value(RefundStatus::Succeeded));
        assert!(refund.next_action.is_none());
    }

    #[test]
    fn test_refund_optional_keys_stay_absent() {
        let refund: Refund = serde_json::from_value(refund_json()).unwrap();
        let out = serde_json::to_value(&refund).unwrap();
        assert!(out.get("description").is_none());
        assert!(out.get("failure_reason").is_none());
        assert_eq!(out["receipt_number"], serde_json::Value::Null);
    }

    #[test]
    fn test_refund_description_rejects_null() {
        let mut raw = refund_json();
        raw["description"] = serde_json::Value::Null;
        assert!(serde_json::from_value::<Refund>(raw).is_err());
    }
}
