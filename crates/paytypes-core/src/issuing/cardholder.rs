use super::SpendingControls;
use crate::common::{Address, Dob};
use crate::expandable::Expandable;
use crate::file::File;
use crate::ids::IssuingCardholderId;
use crate::object::{Metadata, Tag, Timestamp};
use crate::presence::{MaybeNull, nullable};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The person or business a card is issued to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IssuingCardholder {
    pub id: IssuingCardholderId,
    pub object: Tag<IssuingCardholder>,
    pub billing: CardholderBilling,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub company: MaybeNull<CardholderCompany>,
    pub created: Timestamp,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub email: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub individual: MaybeNull<CardholderIndividual>,
    pub livemode: bool,
    pub metadata: Metadata,
    pub name: String,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub phone_number: MaybeNull<String>,
    pub requirements: CardholderRequirements,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub spending_controls: MaybeNull<SpendingControls>,
    pub status: CardholderStatus,
    #[serde(rename = "type")]
    pub type_: CardholderType,
}

crate::impl_object!(IssuingCardholder, "issuing.cardholder", id);

literal_enum! {
    pub enum CardholderStatus {
        Active = "active",
        Blocked = "blocked",
        Inactive = "inactive",
    }
}

literal_enum! {
    pub enum CardholderType {
        Company = "company",
        Individual = "individual",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CardholderBilling {
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CardholderCompany {
    pub tax_id_provided: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CardholderIndividual {
    #[serde(deserialize_with = "nullable")]
    pub dob: Option<Dob>,
    pub first_name: String,
    pub last_name: String,
    #[serde(deserialize_with = "nullable")]
    pub verification: Option<CardholderVerification>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CardholderVerification {
    #[serde(deserialize_with = "nullable")]
    pub document: Option<CardholderIdDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CardholderIdDocument {
    #[serde(deserialize_with = "nullable")]
    pub back: Option<Expandable<File>>,
    #[serde(deserialize_with = "nullable")]
    pub front: Option<Expandable<File>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CardholderRequirements {
    #[serde(deserialize_with = "nullable")]
    pub disabled_reason: Option<CardholderDisabledReason>,
    #[serde(deserialize_with = "nullable")]
    pub past_due: Option<Vec<CardholderPastDue>>,
}

literal_enum! {
    pub enum CardholderDisabledReason {
        Listed = "listed",
        RejectedListed = "rejected.listed",
        UnderReview = "under_review",
    }
}

literal_enum! {
    pub enum CardholderPastDue {
        CompanyTaxId = "company.tax_id",
        IndividualDobDay = "individual.dob.day",
        IndividualDobMonth = "individual.dob.month",
        IndividualDobYear = "individual.dob.year",
        IndividualFirstName = "individual.first_name",
        IndividualLastName = "individual.last_name",
        IndividualVerificationDocument = "individual.verification.document",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dotted_requirement_literals() {
        let requirements: CardholderRequirements = serde_json::from_value(json!({
            "disabled_reason": "rejected.listed",
            "past_due": ["individual.dob.day", "company.tax_id"]
        }))
        .unwrap();
        assert_eq!(requirements.disabled_reason, Some(CardholderDisabledReason::RejectedListed));
        assert_eq!(
            requirements.past_due.unwrap(),
            vec![CardholderPastDue::IndividualDobDay, CardholderPastDue::CompanyTaxId]
        );
    }
}
