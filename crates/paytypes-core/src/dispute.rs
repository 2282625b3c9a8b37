use crate::balance::BalanceTransaction;
use crate::charge::Charge;
use crate::expandable::Expandable;
use crate::file::File;
use crate::ids::DisputeId;
use crate::object::{Metadata, Tag, Timestamp};
use crate::payment_intent::PaymentIntent;
use crate::presence::{MaybeNull, nullable};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A cardholder's challenge of a charge with their issuer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Dispute {
    pub id: DisputeId,
    pub object: Tag<Dispute>,
    pub amount: i64,
    pub balance_transactions: Vec<BalanceTransaction>,
    pub charge: Expandable<Charge>,
    pub created: Timestamp,
    pub currency: String,
    pub evidence: DisputeEvidence,
    pub evidence_details: DisputeEvidenceDetails,
    pub is_charge_refundable: bool,
    pub livemode: bool,
    pub metadata: Metadata,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub network_reason_code: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub payment_intent: MaybeNull<Expandable<PaymentIntent>>,
    pub reason: String,
    pub status: DisputeStatus,
}

crate::impl_object!(Dispute, "dispute", id);

impl Dispute {
    pub fn is_closed(&self) -> bool {
        matches!(
            self.status,
            DisputeStatus::Won
                | DisputeStatus::Lost
                | DisputeStatus::ChargeRefunded
                | DisputeStatus::WarningClosed
        )
    }
}

literal_enum! {
    pub enum DisputeStatus {
        ChargeRefunded = "charge_refunded",
        Lost = "lost",
        NeedsResponse = "needs_response",
        UnderReview = "under_review",
        WarningClosed = "warning_closed",
        WarningNeedsResponse = "warning_needs_response",
        WarningUnderReview = "warning_under_review",
        Won = "won",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DisputeEvidence {
    #[serde(deserialize_with = "nullable")]
    pub access_activity_log: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub billing_address: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub cancellation_policy: Option<Expandable<File>>,
    #[serde(deserialize_with = "nullable")]
    pub cancellation_policy_disclosure: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub cancellation_rebuttal: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub customer_communication: Option<Expandable<File>>,
    #[serde(deserialize_with = "nullable")]
    pub customer_email_address: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub customer_name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub customer_purchase_ip: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub customer_signature: Option<Expandable<File>>,
    #[serde(deserialize_with = "nullable")]
    pub duplicate_charge_documentation: Option<Expandable<File>>,
    #[serde(deserialize_with = "nullable")]
    pub duplicate_charge_explanation: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub duplicate_charge_id: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub product_description: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub receipt: Option<Expandable<File>>,
    #[serde(deserialize_with = "nullable")]
    pub refund_policy: Option<Expandable<File>>,
    #[serde(deserialize_with = "nullable")]
    pub refund_policy_disclosure: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub refund_refusal_explanation: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub service_date: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub service_documentation: Option<Expandable<File>>,
    #[serde(deserialize_with = "nullable")]
    pub shipping_address: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub shipping_carrier: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub shipping_date: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub shipping_documentation: Option<Expandable<File>>,
    #[serde(deserialize_with = "nullable")]
    pub shipping_tracking_number: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub uncategorized_file: Option<Expandable<File>>,
    #[serde(deserialize_with = "nullable")]
    pub uncategorized_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DisputeEvidenceDetails {
    #[serde(deserialize_with = "nullable")]
    pub due_by: Option<Timestamp>,
    pub has_evidence: bool,
    pub past_due: bool,
    pub submission_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    const MINIMAL: &str = include_str!("../tests/fixtures/minimal/dispute.json");

    fn minimal() -> Value {
        serde_json::from_str(MINIMAL).unwrap()
    }

    #[test]
    fn test_minimal_dispute_round_trip() {
        let dispute: Dispute = serde_json::from_value(minimal()).unwrap();
        assert!(dispute.payment_intent.is_absent());
        assert!(dispute.network_reason_code.is_absent());
        assert_eq!(dispute.evidence.receipt, None);
        assert!(dispute.is_closed());
        assert_eq!(serde_json::to_value(&dispute).unwrap(), minimal());
    }

    #[test]
    fn test_evidence_fields_must_be_present() {
        let mut payload = minimal();
        payload["evidence"]
            .as_object_mut()
            .unwrap()
            .remove("shipping_carrier");
        let err = serde_json::from_value::<Dispute>(payload).unwrap_err();
        assert!(err.to_string().contains("missing field `shipping_carrier`"));
    }

    #[test]
    fn test_evidence_file_reference() {
        let mut payload = minimal();
        payload["evidence"]["receipt"] = json!("file_1");
        payload["status"] = json!("needs_response");

        let dispute: Dispute = serde_json::from_value(payload).unwrap();
        assert_eq!(dispute.evidence.receipt.as_ref().map(Expandable::id), Some("file_1"));
        assert!(!dispute.is_closed());
    }

    #[test]
    fn test_unknown_status_rejected() {
        let mut payload = minimal();
        payload["status"] = json!("escalated");
        assert!(serde_json::from_value::<Dispute>(payload).is_err());
    }
}
