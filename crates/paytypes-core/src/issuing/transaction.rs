use super::{IssuingAmountDetails, IssuingAuthorization, IssuingCard, IssuingCardholder, IssuingDispute, MerchantData};
use crate::balance::BalanceTransaction;
use crate::expandable::Expandable;
use crate::ids::IssuingTransactionId;
use crate::object::{Metadata, Tag, Timestamp};
use crate::presence::{MaybeNull, nullable};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A capture or refund settled against an issued card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IssuingTransaction {
    pub id: IssuingTransactionId,
    pub object: Tag<IssuingTransaction>,
    pub amount: i64,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub amount_details: MaybeNull<IssuingAmountDetails>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub authorization: MaybeNull<Expandable<IssuingAuthorization>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub balance_transaction: MaybeNull<Expandable<BalanceTransaction>>,
    pub card: Expandable<IssuingCard>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub cardholder: MaybeNull<Expandable<IssuingCardholder>>,
    pub created: Timestamp,
    pub currency: String,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub dispute: MaybeNull<Expandable<IssuingDispute>>,
    pub livemode: bool,
    pub merchant_amount: i64,
    pub merchant_currency: String,
    pub merchant_data: MerchantData,
    pub metadata: Metadata,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub purchase_details: MaybeNull<PurchaseDetails>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub treasury: MaybeNull<TransactionTreasury>,
    #[serde(rename = "type")]
    pub type_: IssuingTransactionType,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub wallet: MaybeNull<TransactionWallet>,
}

crate::impl_object!(IssuingTransaction, "issuing.transaction", id);

literal_enum! {
    pub enum IssuingTransactionType {
        Capture = "capture",
        Refund = "refund",
    }
}

literal_enum! {
    pub enum TransactionWallet {
        ApplePay = "apple_pay",
        GooglePay = "google_pay",
        SamsungPay = "samsung_pay",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TransactionTreasury {
    #[serde(deserialize_with = "nullable")]
    pub received_credit: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub received_debit: Option<String>,
}

/// Industry-specific detail attached to a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PurchaseDetails {
    #[serde(deserialize_with = "nullable")]
    pub flight: Option<Flight>,
    #[serde(deserialize_with = "nullable")]
    pub fuel: Option<Fuel>,
    #[serde(deserialize_with = "nullable")]
    pub lodging: Option<Lodging>,
    #[serde(deserialize_with = "nullable")]
    pub receipt: Option<Vec<ReceiptLine>>,
    #[serde(deserialize_with = "nullable")]
    pub reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Flight {
    #[serde(deserialize_with = "nullable")]
    pub departure_at: Option<Timestamp>,
    #[serde(deserialize_with = "nullable")]
    pub passenger_name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub refundable: Option<bool>,
    #[serde(deserialize_with = "nullable")]
    pub segments: Option<Vec<FlightSegment>>,
    #[serde(deserialize_with = "nullable")]
    pub travel_agency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FlightSegment {
    #[serde(deserialize_with = "nullable")]
    pub arrival_airport_code: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub carrier: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub departure_airport_code: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub flight_number: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub service_class: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub stopover_allowed: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Fuel {
    #[serde(rename = "type")]
    pub type_: String,
    pub unit: String,
    pub unit_cost_decimal: String,
    #[serde(deserialize_with = "nullable")]
    pub volume_decimal: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Lodging {
    #[serde(deserialize_with = "nullable")]
    pub check_in_at: Option<Timestamp>,
    #[serde(deserialize_with = "nullable")]
    pub nights: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReceiptLine {
    #[serde(deserialize_with = "nullable")]
    pub description: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub quantity: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    pub total: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub unit_cost: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    const MINIMAL: &str =
        include_str!("../../tests/fixtures/minimal/issuing.transaction.json");

    fn minimal() -> Value {
        serde_json::from_str(MINIMAL).unwrap()
    }

    #[test]
    fn test_minimal_transaction_round_trip() {
        let txn: IssuingTransaction = serde_json::from_value(minimal()).unwrap();
        assert_eq!(txn.type_, IssuingTransactionType::Capture);
        assert_eq!(txn.card.id(), "card_1");
        assert!(txn.wallet.is_absent());
        assert_eq!(serde_json::to_value(&txn).unwrap(), minimal());
    }

    #[test]
    fn test_wallet_three_states() {
        let mut payload = minimal();
        payload["wallet"] = json!(null);
        let txn: IssuingTransaction = serde_json::from_value(payload.clone()).unwrap();
        assert!(txn.wallet.is_null());
        assert_eq!(serde_json::to_value(&txn).unwrap(), payload);

        payload["wallet"] = json!("apple_pay");
        let txn: IssuingTransaction = serde_json::from_value(payload).unwrap();
        assert_eq!(txn.wallet, MaybeNull::Value(TransactionWallet::ApplePay));
    }

    #[test]
    fn test_merchant_data_nullable_fields_required() {
        let mut payload = minimal();
        payload["merchant_data"].as_object_mut().unwrap().remove("city");
        let err = serde_json::from_value::<IssuingTransaction>(payload).unwrap_err();
        assert!(err.to_string().contains("missing field `city`"));
    }

    #[test]
    fn test_authorization_literal_rejected() {
        let mut payload = minimal();
        payload["object"] = json!("issuing.authorization");
        assert!(serde_json::from_value::<IssuingTransaction>(payload).is_err());
    }
}
