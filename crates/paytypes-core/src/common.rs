//! Shapes shared by many resources.

use crate::presence::{MaybeNull, nullable, present};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Address {
    #[serde(deserialize_with = "nullable")]
    pub city: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub country: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub line1: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub line2: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub postal_code: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Shipping {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub carrier: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub phone: MaybeNull<String>,
    #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
    pub tracking_number: MaybeNull<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BillingDetails {
    #[serde(deserialize_with = "nullable")]
    pub address: Option<Address>,
    #[serde(deserialize_with = "nullable")]
    pub email: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PackageDimensions {
    pub height: f64,
    pub length: f64,
    pub weight: f64,
    pub width: f64,
}

/// Bounds for a customer-chosen amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CustomUnitAmount {
    #[serde(deserialize_with = "nullable")]
    pub maximum: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub minimum: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub preset: Option<i64>,
}

/// Date of birth as reported for people and cardholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Dob {
    #[serde(deserialize_with = "nullable")]
    pub day: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub month: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub year: Option<i64>,
}

/// Japanese address with kana/kanji script variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct JapanAddress {
    #[serde(deserialize_with = "nullable")]
    pub city: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub country: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub line1: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub line2: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub postal_code: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub state: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub town: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_address_requires_every_key() {
        let full = json!({
            "city": "Berlin", "country": "DE", "line1": "Unter den Linden 1",
            "line2": null, "postal_code": "10117", "state": null
        });
        let address: Address = serde_json::from_value(full).unwrap();
        assert_eq!(address.country.as_deref(), Some("DE"));

        let partial = json!({"city": "Berlin"});
        assert!(serde_json::from_value::<Address>(partial).is_err());
    }

    #[test]
    fn test_shipping_optional_keys() {
        let shipping: Shipping = serde_json::from_value(json!({"name": "Jenny"})).unwrap();
        assert!(shipping.address.is_none());
        assert!(shipping.phone.is_absent());
        assert_eq!(
            serde_json::to_value(&shipping).unwrap(),
            json!({"name": "Jenny"})
        );
    }
}
