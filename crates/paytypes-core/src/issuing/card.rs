use super::{IssuingCardholder, SpendingControls};
use crate::common::Address;
use crate::expandable::Expandable;
use crate::ids::IssuingCardId;
use crate::object::{Metadata, Tag, Timestamp};
use crate::presence::{MaybeNull, nullable, present};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IssuingCard {
    pub id: IssuingCardId,
    pub object: Tag<IssuingCard>,
    pub brand: String,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub cancellation_reason: MaybeNull<CardCancellationReason>,
    pub cardholder: IssuingCardholder,
    pub created: Timestamp,
    pub currency: String,
    /// Only present when expanded on retrieval.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub cvc: Option<String>,
    pub exp_month: i64,
    pub exp_year: i64,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub financial_account: MaybeNull<String>,
    pub last4: String,
    pub livemode: bool,
    pub metadata: Metadata,
    /// Only present when expanded on retrieval.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub replaced_by: MaybeNull<Expandable<IssuingCard>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub replacement_for: MaybeNull<Expandable<IssuingCard>>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub replacement_reason: MaybeNull<ReplacementReason>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub shipping: MaybeNull<IssuingCardShipping>,
    pub spending_controls: SpendingControls,
    pub status: IssuingCardStatus,
    #[serde(rename = "type")]
    pub type_: IssuingCardType,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub wallets: MaybeNull<IssuingCardWallets>,
}

crate::impl_object!(IssuingCard, "issuing.card", id);

impl IssuingCard {
    pub fn is_active(&self) -> bool {
        self.status == IssuingCardStatus::Active
    }
}

literal_enum! {
    pub enum CardCancellationReason {
        DesignRejected = "design_rejected",
        Lost = "lost",
        Stolen = "stolen",
    }
}

literal_enum! {
    pub enum ReplacementReason {
        Damaged = "damaged",
        Expired = "expired",
        Lost = "lost",
        Stolen = "stolen",
    }
}

literal_enum! {
    pub enum IssuingCardStatus {
        Active = "active",
        Canceled = "canceled",
        Inactive = "inactive",
    }
}

literal_enum! {
    pub enum IssuingCardType {
        Physical = "physical",
        Virtual = "virtual",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IssuingCardShipping {
    pub address: Address,
    #[serde(deserialize_with = "nullable")]
    pub carrier: Option<ShippingCarrier>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub customs: MaybeNull<ShippingCustoms>,
    #[serde(deserialize_with = "nullable")]
    pub eta: Option<Timestamp>,
    pub name: String,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub phone_number: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub require_signature: MaybeNull<bool>,
    pub service: ShippingService,
    #[serde(deserialize_with = "nullable")]
    pub status: Option<ShippingStatus>,
    #[serde(deserialize_with = "nullable")]
    pub tracking_number: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub tracking_url: Option<String>,
    #[serde(rename = "type")]
    pub type_: ShippingType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ShippingCustoms {
    #[serde(deserialize_with = "nullable")]
    pub eori_number: Option<String>,
}

literal_enum! {
    pub enum ShippingCarrier {
        Dhl = "dhl",
        Fedex = "fedex",
        RoyalMail = "royal_mail",
        Usps = "usps",
    }
}

literal_enum! {
    pub enum ShippingService {
        Express = "express",
        Priority = "priority",
        Standard = "standard",
    }
}

literal_enum! {
    pub enum ShippingStatus {
        Canceled = "canceled",
        Delivered = "delivered",
        Failure = "failure",
        Pending = "pending",
        Returned = "returned",
        Shipped = "shipped",
    }
}

literal_enum! {
    pub enum ShippingType {
        Bulk = "bulk",
        Individual = "individual",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IssuingCardWallets {
    pub apple_pay: WalletEligibility,
    pub google_pay: WalletEligibility,
    #[serde(deserialize_with = "nullable")]
    pub primary_account_identifier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WalletEligibility {
    pub eligible: bool,
    #[serde(deserialize_with = "nullable")]
    pub ineligible_reason: Option<IneligibleReason>,
}

literal_enum! {
    pub enum IneligibleReason {
        MissingAgreement = "missing_agreement",
        MissingCardholderContact = "missing_cardholder_contact",
        UnsupportedRegion = "unsupported_region",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issuing::MerchantCategory;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    const MINIMAL: &str = include_str!("../../tests/fixtures/minimal/issuing.card.json");

    fn minimal() -> Value {
        serde_json::from_str(MINIMAL).unwrap()
    }

    fn shipping() -> Value {
        json!({
            "address": {
                "city": "Berlin",
                "country": "DE",
                "line1": "Unter den Linden 1",
                "line2": null,
                "postal_code": "10117",
                "state": null
            },
            "carrier": null,
            "eta": null,
            "name": "Jenny Rosen",
            "service": "standard",
            "status": "pending",
            "tracking_number": null,
            "tracking_url": null,
            "type": "individual"
        })
    }

    #[test]
    fn test_minimal_card_round_trip() {
        let card: IssuingCard = serde_json::from_value(minimal()).unwrap();
        assert!(card.is_active());
        assert!(card.shipping.is_absent());
        assert_eq!(card.number, None);
        assert_eq!(serde_json::to_value(&card).unwrap(), minimal());
    }

    #[test]
    fn test_shipping_presence_rules() {
        let mut payload = minimal();
        payload["shipping"] = shipping();
        let card: IssuingCard = serde_json::from_value(payload.clone()).unwrap();
        let shipping = card.shipping.as_option().unwrap();
        assert_eq!(shipping.service, ShippingService::Standard);
        assert!(shipping.customs.is_absent());
        assert_eq!(shipping.carrier, None);
        assert_eq!(serde_json::to_value(&card).unwrap(), payload);

        payload["shipping"].as_object_mut().unwrap().remove("eta");
        let err = serde_json::from_value::<IssuingCard>(payload).unwrap_err();
        assert!(err.to_string().contains("missing field `eta`"));
    }

    #[test]
    fn test_expanded_only_fields_reject_null() {
        let mut payload = minimal();
        payload["number"] = json!("4242424242424242");
        let card: IssuingCard = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(card.number.as_deref(), Some("4242424242424242"));

        payload["cvc"] = json!(null);
        assert!(serde_json::from_value::<IssuingCard>(payload).is_err());
    }

    #[test]
    fn test_spending_controls_on_card() {
        let mut payload = minimal();
        payload["spending_controls"]["blocked_categories"] = json!(["bakeries"]);
        let card: IssuingCard = serde_json::from_value(payload).unwrap();

        assert!(!card.spending_controls.permits(MerchantCategory::Bakeries));
        assert!(card
            .spending_controls
            .permits(MerchantCategory::AirportsFlyingFields));
    }
}
