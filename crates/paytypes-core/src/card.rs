use crate::account::AccountOrDeleted;
use crate::bank_account::PayoutMethod;
use crate::customer::CustomerOrDeleted;
use crate::expandable::Expandable;
use crate::ids::CardId;
use crate::object::{DeletedFlag, Metadata, Tag};
use crate::presence::MaybeNull;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A card attached to a customer or a connected account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Card {
    pub id: CardId,
    pub object: Tag<Card>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub account: MaybeNull<Expandable<AccountOrDeleted>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub address_city: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub address_country: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub address_line1: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub address_line1_check: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub address_line2: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub address_state: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub address_zip: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub address_zip_check: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub available_payout_methods: MaybeNull<Vec<PayoutMethod>>,
    pub brand: String,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub country: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub currency: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub customer: MaybeNull<Expandable<CustomerOrDeleted>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub cvc_check: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub default_for_currency: MaybeNull<bool>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub dynamic_last4: MaybeNull<String>,
    pub exp_month: i64,
    pub exp_year: i64,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub fingerprint: MaybeNull<String>,
    pub funding: String,
    pub last4: String,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub metadata: MaybeNull<Metadata>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub name: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub status: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub tokenization_method: MaybeNull<String>,
}

crate::impl_object!(Card, "card", id);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DeletedCard {
    pub id: CardId,
    pub object: Tag<Card>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub currency: MaybeNull<String>,
    pub deleted: DeletedFlag,
}

crate::impl_object!(DeletedCard, "card", deleted);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::object::decode;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    const MINIMAL: &str = include_str!("../tests/fixtures/minimal/card.json");

    fn minimal() -> Value {
        serde_json::from_str(MINIMAL).unwrap()
    }

    #[test]
    fn test_minimal_card_round_trip() {
        let card: Card = serde_json::from_value(minimal()).unwrap();
        assert!(card.cvc_check.is_absent());
        assert!(card.customer.is_absent());
        assert_eq!(serde_json::to_value(&card).unwrap(), minimal());
    }

    #[test]
    fn test_check_absent_null_or_set() {
        let mut payload = minimal();
        payload["cvc_check"] = json!(null);
        payload["address_zip_check"] = json!("pass");

        let card: Card = serde_json::from_value(payload.clone()).unwrap();
        assert!(card.cvc_check.is_null());
        assert_eq!(card.address_zip_check.as_option().map(String::as_str), Some("pass"));
        assert_eq!(serde_json::to_value(&card).unwrap(), payload);
    }

    #[test]
    fn test_required_field_missing() {
        let mut payload = minimal();
        payload.as_object_mut().unwrap().remove("last4");
        let err = serde_json::from_value::<Card>(payload).unwrap_err();
        assert!(err.to_string().contains("missing field `last4`"));
    }

    #[test]
    fn test_deleted_card_is_not_a_card() {
        let stub = json!({"id": "card_1", "object": "card", "currency": null, "deleted": true});
        let deleted: DeletedCard = decode(stub.clone()).unwrap();
        assert!(deleted.currency.is_null());

        let err = decode::<Card>(stub).unwrap_err();
        assert!(matches!(err, Error::UnexpectedObject { .. }));
    }

    #[test]
    fn test_bank_account_literal_rejected() {
        let mut payload = minimal();
        payload["object"] = json!("bank_account");
        assert!(serde_json::from_value::<Card>(payload).is_err());
    }
}
