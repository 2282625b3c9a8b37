use super::{IssuingAmountDetails, IssuingCard, IssuingCardholder, IssuingTransaction, MerchantData};
use crate::balance::BalanceTransaction;
use crate::expandable::Expandable;
use crate::ids::IssuingAuthorizationId;
use crate::object::{Metadata, Tag, Timestamp};
use crate::presence::{MaybeNull, nullable};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A card network asking whether a purchase may proceed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IssuingAuthorization {
    pub id: IssuingAuthorizationId,
    pub object: Tag<IssuingAuthorization>,
    pub amount: i64,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub amount_details: MaybeNull<IssuingAmountDetails>,
    pub approved: bool,
    pub authorization_method: AuthorizationMethod,
    pub balance_transactions: Vec<BalanceTransaction>,
    pub card: IssuingCard,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub cardholder: MaybeNull<Expandable<IssuingCardholder>>,
    pub created: Timestamp,
    pub currency: String,
    pub livemode: bool,
    pub merchant_amount: i64,
    pub merchant_currency: String,
    pub merchant_data: MerchantData,
    pub metadata: Metadata,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub network_data: MaybeNull<AuthorizationNetworkData>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub pending_request: MaybeNull<PendingRequest>,
    pub request_history: Vec<RequestHistory>,
    pub status: AuthorizationStatus,
    pub transactions: Vec<IssuingTransaction>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub treasury: MaybeNull<AuthorizationTreasury>,
    pub verification_data: VerificationData,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub wallet: MaybeNull<String>,
}

crate::impl_object!(IssuingAuthorization, "issuing.authorization", id);

impl IssuingAuthorization {
    /// Whether a decision is still expected from the integration.
    pub fn awaiting_decision(&self) -> bool {
        self.status == AuthorizationStatus::Pending && self.pending_request.is_value()
    }
}

literal_enum! {
    pub enum AuthorizationMethod {
        Chip = "chip",
        Contactless = "contactless",
        KeyedIn = "keyed_in",
        Online = "online",
        Swipe = "swipe",
    }
}

literal_enum! {
    pub enum AuthorizationStatus {
        Closed = "closed",
        Pending = "pending",
        Reversed = "reversed",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuthorizationNetworkData {
    #[serde(deserialize_with = "nullable")]
    pub acquiring_institution_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PendingRequest {
    pub amount: i64,
    #[serde(deserialize_with = "nullable")]
    pub amount_details: Option<IssuingAmountDetails>,
    pub currency: String,
    pub is_amount_controllable: bool,
    pub merchant_amount: i64,
    pub merchant_currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RequestHistory {
    pub amount: i64,
    #[serde(deserialize_with = "nullable")]
    pub amount_details: Option<IssuingAmountDetails>,
    pub approved: bool,
    pub created: Timestamp,
    pub currency: String,
    pub merchant_amount: i64,
    pub merchant_currency: String,
    pub reason: RequestHistoryReason,
}

literal_enum! {
    pub enum RequestHistoryReason {
        AccountDisabled = "account_disabled",
        CardActive = "card_active",
        CardInactive = "card_inactive",
        CardholderInactive = "cardholder_inactive",
        CardholderVerificationRequired = "cardholder_verification_required",
        InsufficientFunds = "insufficient_funds",
        NotAllowed = "not_allowed",
        SpendingControls = "spending_controls",
        SuspectedFraud = "suspected_fraud",
        VerificationFailed = "verification_failed",
        WebhookApproved = "webhook_approved",
        WebhookDeclined = "webhook_declined",
        WebhookTimeout = "webhook_timeout",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuthorizationTreasury {
    pub received_credits: Vec<String>,
    pub received_debits: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub transaction: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VerificationData {
    pub address_line1_check: VerificationCheck,
    pub address_postal_code_check: VerificationCheck,
    pub cvc_check: VerificationCheck,
    pub expiry_check: VerificationCheck,
}

literal_enum! {
    pub enum VerificationCheck {
        Match = "match",
        Mismatch = "mismatch",
        NotProvided = "not_provided",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    const MINIMAL: &str =
        include_str!("../../tests/fixtures/minimal/issuing.authorization.json");

    fn minimal() -> Value {
        serde_json::from_str(MINIMAL).unwrap()
    }

    #[test]
    fn test_minimal_authorization_round_trip() {
        let auth: IssuingAuthorization = serde_json::from_value(minimal()).unwrap();
        assert!(auth.pending_request.is_absent());
        assert!(auth.cardholder.is_absent());
        assert_eq!(auth.card.cardholder.name, "name_1");
        assert_eq!(serde_json::to_value(&auth).unwrap(), minimal());
    }

    #[test]
    fn test_awaiting_decision() {
        let mut payload = minimal();
        payload["status"] = json!("pending");
        payload["pending_request"] = json!(null);
        let auth: IssuingAuthorization = serde_json::from_value(payload.clone()).unwrap();
        assert!(auth.pending_request.is_null());
        assert!(!auth.awaiting_decision());

        payload["pending_request"] = json!({
            "amount": 500,
            "amount_details": null,
            "currency": "usd",
            "is_amount_controllable": false,
            "merchant_amount": 500,
            "merchant_currency": "usd"
        });
        let auth: IssuingAuthorization = serde_json::from_value(payload).unwrap();
        assert!(auth.awaiting_decision());
    }

    #[test]
    fn test_pending_request_amount_details_required() {
        let mut payload = minimal();
        payload["pending_request"] = json!({
            "amount": 500,
            "currency": "usd",
            "is_amount_controllable": false,
            "merchant_amount": 500,
            "merchant_currency": "usd"
        });
        let err = serde_json::from_value::<IssuingAuthorization>(payload).unwrap_err();
        assert!(err.to_string().contains("missing field `amount_details`"));
    }

    #[test]
    fn test_verification_check_literals() {
        let mut payload = minimal();
        payload["verification_data"]["cvc_check"] = json!("not_provided");
        let auth: IssuingAuthorization = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(auth.verification_data.cvc_check, VerificationCheck::NotProvided);

        payload["verification_data"]["cvc_check"] = json!("unknown");
        assert!(serde_json::from_value::<IssuingAuthorization>(payload).is_err());
    }
}
