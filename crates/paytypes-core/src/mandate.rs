//! Mandates: a customer's permission to debit their payment method.

use crate::expandable::Expandable;
use crate::ids::MandateId;
use crate::object::{Tag, Timestamp};
use crate::payment_method::PaymentMethod;
use crate::presence::{MaybeNull, nullable, present};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Mandate {
    pub id: MandateId,
    pub object: Tag<Mandate>,
    pub customer_acceptance: MandateCustomerAcceptance,
    pub livemode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub multi_use: Option<MandateMultiUse>,
    pub payment_method: Expandable<PaymentMethod>,
    pub payment_method_details: MandatePaymentMethodDetails,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub single_use: Option<MandateSingleUse>,
    pub status: MandateStatus,
    #[serde(rename = "type")]
    pub type_: MandateType,
}

crate::impl_object!(Mandate, "mandate", id);

impl Mandate {
    pub fn is_active(&self) -> bool {
        self.status == MandateStatus::Active
    }
}

literal_enum! {
    pub enum MandateStatus {
        Active = "active",
        Inactive = "inactive",
        Pending = "pending",
    }
}

literal_enum! {
    pub enum MandateType {
        MultiUse = "multi_use",
        SingleUse = "single_use",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MandateCustomerAcceptance {
    #[serde(deserialize_with = "nullable")]
    pub accepted_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub offline: Option<MandateEmpty>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub online: Option<MandateOnline>,
    #[serde(rename = "type")]
    pub type_: AcceptanceType,
}

literal_enum! {
    pub enum AcceptanceType {
        Offline = "offline",
        Online = "online",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MandateOnline {
    #[serde(deserialize_with = "nullable")]
    pub ip_address: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MandateEmpty {}

pub type MandateMultiUse = MandateEmpty;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MandateSingleUse {
    pub amount: i64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MandatePaymentMethodDetails {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub acss_debit: Option<MandateAcssDebit>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub au_becs_debit: Option<MandateUrl>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub bacs_debit: Option<MandateBacsDebit>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub blik: Option<MandateBlik>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub card: Option<MandateEmpty>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub card_present: Option<MandateEmpty>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub link: Option<MandateEmpty>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub sepa_debit: Option<MandateSepaDebit>,
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub us_bank_account: Option<MandateEmpty>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MandateAcssDebit {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub default_for: Option<Vec<MandateDefaultFor>>,
    #[serde(deserialize_with = "nullable")]
    pub interval_description: Option<String>,
    pub payment_schedule: PaymentSchedule,
    pub transaction_type: TransactionType,
}

literal_enum! {
    pub enum MandateDefaultFor {
        Invoice = "invoice",
        Subscription = "subscription",
    }
}

literal_enum! {
    pub enum PaymentSchedule {
        Combined = "combined",
        Interval = "interval",
        Sporadic = "sporadic",
    }
}

literal_enum! {
    pub enum TransactionType {
        Business = "business",
        Personal = "personal",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MandateUrl {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MandateBacsDebit {
    pub network_status: BacsNetworkStatus,
    pub reference: String,
    pub url: String,
}

literal_enum! {
    pub enum BacsNetworkStatus {
        Accepted = "accepted",
        Pending = "pending",
        Refused = "refused",
        Revoked = "revoked",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MandateBlik {
    #[serde(deserialize_with = "nullable")]
    pub expires_after: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub off_session: Option<BlikOffSession>,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub type_: Option<BlikMandateType>,
}

literal_enum! {
    pub enum BlikMandateType {
        OffSession = "off_session",
        OnSession = "on_session",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BlikOffSession {
    #[serde(deserialize_with = "nullable")]
    pub amount: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub frequency: MaybeNull<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MandateSepaDebit {
    pub reference: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sepa_mandate() {
        let mandate: Mandate = serde_json::from_value(json!({
            "id": "mandate_1",
            "object": "mandate",
            "customer_acceptance": {
                "accepted_at": 1680000000,
                "online": {"ip_address": "127.0.0.1", "user_agent": "curl/8"},
                "type": "online"
            },
            "livemode": false,
            "multi_use": {},
            "payment_method": "pm_1",
            "payment_method_details": {
                "sepa_debit": {"reference": "REF1", "url": "https://example.com/mandate"},
                "type": "sepa_debit"
            },
            "status": "active",
            "type": "multi_use"
        }))
        .unwrap();
        assert!(mandate.is_active());
        assert_eq!(mandate.payment_method.id(), "pm_1");
        assert_eq!(mandate.multi_use, Some(MandateEmpty {}));
        assert_eq!(mandate.customer_acceptance.type_, AcceptanceType::Online);
    }
}
