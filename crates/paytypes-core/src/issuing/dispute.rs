use super::IssuingTransaction;
use crate::balance::BalanceTransaction;
use crate::expandable::Expandable;
use crate::file::File;
use crate::ids::IssuingDisputeId;
use crate::object::{Metadata, Tag, Timestamp};
use crate::presence::{MaybeNull, nullable, present};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IssuingDispute {
    pub id: IssuingDisputeId,
    pub object: Tag<IssuingDispute>,
    pub amount: i64,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub balance_transactions: MaybeNull<Vec<BalanceTransaction>>,
    pub created: Timestamp,
    pub currency: String,
    pub evidence: IssuingDisputeEvidence,
    pub livemode: bool,
    pub metadata: Metadata,
    pub status: IssuingDisputeStatus,
    pub transaction: Expandable<IssuingTransaction>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub treasury: MaybeNull<IssuingDisputeTreasury>,
}

crate::impl_object!(IssuingDispute, "issuing.dispute", id);

literal_enum! {
    pub enum IssuingDisputeStatus {
        Expired = "expired",
        Lost = "lost",
        Submitted = "submitted",
        Unsubmitted = "unsubmitted",
        Won = "won",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IssuingDisputeTreasury {
    #[serde(deserialize_with = "nullable")]
    pub debit_reversal: Option<String>,
    pub received_debit: String,
}

literal_enum! {
    pub enum IssuingDisputeReason {
        Canceled = "canceled",
        Duplicate = "duplicate",
        Fraudulent = "fraudulent",
        MerchandiseNotAsDescribed = "merchandise_not_as_described",
        NotReceived = "not_received",
        Other = "other",
        ServiceNotAsDescribed = "service_not_as_described",
    }
}

/// Evidence for the dispute. Only the field named by `reason` is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IssuingDisputeEvidence {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub canceled: Option<EvidenceCanceled>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub duplicate: Option<EvidenceDuplicate>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub fraudulent: Option<EvidenceFraudulent>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub merchandise_not_as_described: Option<EvidenceMerchandiseNotAsDescribed>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub not_received: Option<EvidenceNotReceived>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub other: Option<EvidenceOther>,
    pub reason: IssuingDisputeReason,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub service_not_as_described: Option<EvidenceServiceNotAsDescribed>,
}

impl IssuingDisputeEvidence {
    /// Whether the evidence field matching `reason` was supplied.
    pub fn has_evidence_for_reason(&self) -> bool {
        match self.reason {
            IssuingDisputeReason::Canceled => self.canceled.is_some(),
            IssuingDisputeReason::Duplicate => self.duplicate.is_some(),
            IssuingDisputeReason::Fraudulent => self.fraudulent.is_some(),
            IssuingDisputeReason::MerchandiseNotAsDescribed => {
                self.merchandise_not_as_described.is_some()
            }
            IssuingDisputeReason::NotReceived => self.not_received.is_some(),
            IssuingDisputeReason::Other => self.other.is_some(),
            IssuingDisputeReason::ServiceNotAsDescribed => self.service_not_as_described.is_some(),
        }
    }
}

literal_enum! {
    pub enum DisputedProductType {
        Merchandise = "merchandise",
        Service = "service",
    }
}

literal_enum! {
    pub enum ReturnStatus {
        MerchantRejected = "merchant_rejected",
        Successful = "successful",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EvidenceCanceled {
    #[serde(deserialize_with = "nullable")]
    pub additional_documentation: Option<Expandable<File>>,
    #[serde(deserialize_with = "nullable")]
    pub canceled_at: Option<Timestamp>,
    #[serde(deserialize_with = "nullable")]
    pub cancellation_policy_provided: Option<bool>,
    #[serde(deserialize_with = "nullable")]
    pub cancellation_reason: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub expected_at: Option<Timestamp>,
    #[serde(deserialize_with = "nullable")]
    pub explanation: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub product_description: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub product_type: Option<DisputedProductType>,
    #[serde(deserialize_with = "nullable")]
    pub return_status: Option<ReturnStatus>,
    #[serde(deserialize_with = "nullable")]
    pub returned_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EvidenceDuplicate {
    #[serde(deserialize_with = "nullable")]
    pub additional_documentation: Option<Expandable<File>>,
    #[serde(deserialize_with = "nullable")]
    pub card_statement: Option<Expandable<File>>,
    #[serde(deserialize_with = "nullable")]
    pub cash_receipt: Option<Expandable<File>>,
    #[serde(deserialize_with = "nullable")]
    pub check_image: Option<Expandable<File>>,
    #[serde(deserialize_with = "nullable")]
    pub explanation: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub original_transaction: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EvidenceFraudulent {
    #[serde(deserialize_with = "nullable")]
    pub additional_documentation: Option<Expandable<File>>,
    #[serde(deserialize_with = "nullable")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EvidenceMerchandiseNotAsDescribed {
    #[serde(deserialize_with = "nullable")]
    pub additional_documentation: Option<Expandable<File>>,
    #[serde(deserialize_with = "nullable")]
    pub explanation: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub received_at: Option<Timestamp>,
    #[serde(deserialize_with = "nullable")]
    pub return_description: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub return_status: Option<ReturnStatus>,
    #[serde(deserialize_with = "nullable")]
    pub returned_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EvidenceNotReceived {
    #[serde(deserialize_with = "nullable")]
    pub additional_documentation: Option<Expandable<File>>,
    #[serde(deserialize_with = "nullable")]
    pub expected_at: Option<Timestamp>,
    #[serde(deserialize_with = "nullable")]
    pub explanation: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub product_description: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub product_type: Option<DisputedProductType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EvidenceOther {
    #[serde(deserialize_with = "nullable")]
    pub additional_documentation: Option<Expandable<File>>,
    #[serde(deserialize_with = "nullable")]
    pub explanation: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub product_description: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub product_type: Option<DisputedProductType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EvidenceServiceNotAsDescribed {
    #[serde(deserialize_with = "nullable")]
    pub additional_documentation: Option<Expandable<File>>,
    #[serde(deserialize_with = "nullable")]
    pub canceled_at: Option<Timestamp>,
    #[serde(deserialize_with = "nullable")]
    pub cancellation_reason: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub explanation: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub received_at: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_evidence_matches_reason() {
        let evidence: IssuingDisputeEvidence = serde_json::from_value(json!({
            "fraudulent": {"additional_documentation": null, "explanation": "Card was stolen"},
            "reason": "fraudulent"
        }))
        .unwrap();
        assert!(evidence.has_evidence_for_reason());

        let missing: IssuingDisputeEvidence =
            serde_json::from_value(json!({"reason": "duplicate"})).unwrap();
        assert!(!missing.has_evidence_for_reason());
    }
}
