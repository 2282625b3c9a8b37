//! Legacy sources and the `PaymentSource` union.

use crate::account::Account;
use crate::bank_account::BankAccount;
use crate::card::Card;
use crate::common::{Address, Shipping};
use crate::ids::SourceId;
use crate::object::{Metadata, Tag, Timestamp};
use crate::presence::{MaybeNull, nullable, present};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-type fields of the source types without a typed shape.
pub type SourceTypeDetails = HashMap<String, serde_json::Value>;

crate::object_union! {
    /// Anything a charge can be created from.
    pub enum PaymentSource {
        Account(Account),
        BankAccount(BankAccount),
        Card(Card),
        Source(Source),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Source {
    pub id: SourceId,
    pub object: Tag<Source>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub ach_credit_transfer: Option<SourceTypeAchCreditTransfer>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub ach_debit: Option<SourceTypeDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub acss_debit: Option<SourceTypeDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub alipay: Option<SourceTypeDetails>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub amount: MaybeNull<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub au_becs_debit: Option<SourceTypeDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub bancontact: Option<SourceTypeDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub card: Option<SourceTypeCard>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub card_present: Option<SourceTypeDetails>,
    pub client_secret: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub code_verification: Option<SourceCodeVerification>,
    pub created: Timestamp,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub currency: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub customer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub eps: Option<SourceTypeDetails>,
    pub flow: SourceFlow,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub giropay: Option<SourceTypeDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub ideal: Option<SourceTypeDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub klarna: Option<SourceTypeDetails>,
    pub livemode: bool,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub metadata: MaybeNull<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub multibanco: Option<SourceTypeDetails>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub owner: MaybeNull<SourceOwner>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub p24: Option<SourceTypeDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub receiver: Option<SourceReceiver>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub redirect: Option<SourceRedirect>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub sepa_credit_transfer: Option<SourceTypeDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub sepa_debit: Option<SourceTypeSepaDebit>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub sofort: Option<SourceTypeDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub source_order: Option<SourceOrder>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub statement_descriptor: MaybeNull<String>,
    pub status: SourceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub three_d_secure: Option<SourceTypeThreeDSecure>,
    #[serde(rename = "type")]
    pub type_: SourceType,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub usage: MaybeNull<SourceUsage>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub wechat: Option<SourceTypeDetails>,
}

crate::impl_object!(Source, "source", id);

impl Source {
    pub fn is_chargeable(&self) -> bool {
        self.status == SourceStatus::Chargeable
    }

    pub fn is_reusable(&self) -> bool {
        self.usage == MaybeNull::Value(SourceUsage::Reusable)
    }
}

literal_enum! {
    pub enum SourceType {
        AchCreditTransfer = "ach_credit_transfer",
        AchDebit = "ach_debit",
        AcssDebit = "acss_debit",
        Alipay = "alipay",
        AuBecsDebit = "au_becs_debit",
        Bancontact = "bancontact",
        Card = "card",
        CardPresent = "card_present",
        Eps = "eps",
        Giropay = "giropay",
        Ideal = "ideal",
        Klarna = "klarna",
        Multibanco = "multibanco",
        P24 = "p24",
        SepaCreditTransfer = "sepa_credit_transfer",
        SepaDebit = "sepa_debit",
        Sofort = "sofort",
        ThreeDSecure = "three_d_secure",
        Wechat = "wechat",
    }
}

literal_enum! {
    pub enum SourceFlow {
        CodeVerification = "code_verification",
        None = "none",
        Receiver = "receiver",
        Redirect = "redirect",
    }
}

literal_enum! {
    pub enum SourceStatus {
        Canceled = "canceled",
        Chargeable = "chargeable",
        Consumed = "consumed",
        Failed = "failed",
        Pending = "pending",
    }
}

literal_enum! {
    pub enum SourceUsage {
        Reusable = "reusable",
        SingleUse = "single_use",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SourceCodeVerification {
    pub attempts_remaining: i64,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SourceOwner {
    #[serde(deserialize_with = "nullable")]
    pub address: Option<Address>,
    #[serde(deserialize_with = "nullable")]
    pub email: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub verified_address: Option<Address>,
    #[serde(deserialize_with = "nullable")]
    pub verified_email: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub verified_name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub verified_phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SourceReceiver {
    #[serde(deserialize_with = "nullable")]
    pub address: Option<String>,
    pub amount_charged: i64,
    pub amount_received: i64,
    pub amount_returned: i64,
    pub refund_attributes_method: String,
    pub refund_attributes_status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SourceRedirect {
    #[serde(deserialize_with = "nullable")]
    pub failure_reason: Option<String>,
    pub return_url: String,
    pub status: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SourceOrder {
    pub amount: i64,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub email: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub items: Option<Vec<SourceOrderItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub shipping: Option<Shipping>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SourceOrderItem {
    #[serde(deserialize_with = "nullable")]
    pub amount: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub currency: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub description: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub quantity: Option<i64>,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub type_: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct SourceTypeAchCreditTransfer {
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub account_number: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub bank_name: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub fingerprint: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub refund_account_holder_name: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub refund_account_holder_type: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub refund_routing_number: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub routing_number: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub swift_code: MaybeNull<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct SourceTypeCard {
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub address_line1_check: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub address_zip_check: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub brand: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub country: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub cvc_check: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub dynamic_last4: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub exp_month: MaybeNull<i64>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub exp_year: MaybeNull<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub fingerprint: Option<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub funding: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub last4: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub name: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub three_d_secure: Option<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub tokenization_method: MaybeNull<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct SourceTypeSepaDebit {
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub bank_code: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub branch_code: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub country: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub fingerprint: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub last4: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub mandate_reference: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub mandate_url: MaybeNull<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct SourceTypeThreeDSecure {
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub address_line1_check: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub address_zip_check: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub authenticated: MaybeNull<bool>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub brand: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub card: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub country: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub customer: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub cvc_check: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub dynamic_last4: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub exp_month: MaybeNull<i64>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub exp_year: MaybeNull<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub fingerprint: Option<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub funding: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub last4: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub name: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub three_d_secure: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub tokenization_method: MaybeNull<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::HasId;
    use serde_json::json;

    fn card_source() -> serde_json::Value {
        json!({
            "id": "src_1",
            "object": "source",
            "amount": null,
            "card": {
                "brand": "Visa",
                "country": "US",
                "exp_month": 8,
                "exp_year": 2030,
                "last4": "4242",
                "three_d_secure": "optional"
            },
            "client_secret": "src_client_secret_1",
            "created": 1680000000,
            "currency": null,
            "flow": "none",
            "livemode": false,
            "metadata": {},
            "owner": null,
            "statement_descriptor": null,
            "status": "chargeable",
            "type": "card",
            "usage": "reusable"
        })
    }

    #[test]
    fn test_card_source() {
        let source: Source = serde_json::from_value(card_source()).unwrap();
        assert!(source.is_chargeable());
        assert!(source.is_reusable());
        let card = source.card.as_ref().unwrap();
        assert_eq!(card.last4.as_option().map(String::as_str), Some("4242"));
        assert!(card.cvc_check.is_absent());
    }

    #[test]
    fn test_payment_source_dispatch() {
        let source: PaymentSource = serde_json::from_value(card_source()).unwrap();
        assert!(matches!(source, PaymentSource::Source(_)));
        assert_eq!(source.id(), "src_1");

        let err = serde_json::from_value::<PaymentSource>(json!({"id": "x", "object": "charge"}))
            .unwrap_err();
        assert!(err.to_string().contains("unknown object type for PaymentSource: charge"));
    }

    #[test]
    fn test_open_source_type_details() {
        let mut raw = card_source();
        raw["type"] = json!("sofort");
        raw["sofort"] = json!({"country": "DE", "bank_name": null});
        let source: Source = serde_json::from_value(raw).unwrap();
        assert_eq!(source.type_, SourceType::Sofort);
        assert_eq!(source.sofort.unwrap()["country"], "DE");
    }
}
