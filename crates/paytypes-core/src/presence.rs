//! Field presence contracts.
//!
//! The API distinguishes a field that is absent from one that is present
//! with `null`. Plain `Option<T>` blurs the two, so each contract gets its
//! own form:
//!
//! | wire | Rust |
//! |------|------|
//! | `x: T` | `T` |
//! | `x: T \| null` | `Option<T>` with `#[serde(deserialize_with = "nullable")]` |
//! | `x?: T` | `Option<T>` with `#[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]` |
//! | `x?: T \| null` | [`MaybeNull<T>`] with `#[serde(default, skip_serializing_if = "MaybeNull::is_absent")]` |
//!
//! Nullable fields of top-level objects (shapes with an `object` literal)
//! are `x?: T | null`: the published object schemas list only non-nullable
//! keys as required, as the minimal `Coupon` shows. Nested hashes are sent
//! whole with explicit `null`s, so their nullable fields are `x: T | null`
//! unless the key only appears in some contexts.

use schemars::JsonSchema;
use schemars::r#gen::SchemaGenerator;
use schemars::schema::Schema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Read a field that must be present but may be `null`.
///
/// Using `deserialize_with` turns off serde's implicit `None` for a missing
/// `Option` field, so omission is reported as a missing field.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

/// Read a field that may be omitted but is never `null`.
///
/// `T` must not itself accept `null` (no `serde_json::Value`, no `Option`).
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// An optional field that may also be explicitly `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaybeNull<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> MaybeNull<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, MaybeNull::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, MaybeNull::Null)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, MaybeNull::Value(_))
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            MaybeNull::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            MaybeNull::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> MaybeNull<U> {
        match self {
            MaybeNull::Absent => MaybeNull::Absent,
            MaybeNull::Null => MaybeNull::Null,
            MaybeNull::Value(v) => MaybeNull::Value(f(v)),
        }
    }
}

impl<T> Default for MaybeNull<T> {
    fn default() -> Self {
        MaybeNull::Absent
    }
}

impl<T> From<Option<T>> for MaybeNull<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => MaybeNull::Value(v),
            None => MaybeNull::Null,
        }
    }
}

impl<T: Serialize> Serialize for MaybeNull<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MaybeNull::Value(v) => serializer.serialize_some(v),
            MaybeNull::Absent | MaybeNull::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for MaybeNull<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(MaybeNull::from)
    }
}

impl<T: JsonSchema> JsonSchema for MaybeNull<T> {
    fn is_referenceable() -> bool {
        false
    }

    fn schema_name() -> String {
        format!("Nullable_{}", T::schema_name())
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        <Option<T>>::json_schema(generator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Shape {
        #[serde(deserialize_with = "nullable")]
        description: Option<String>,
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            deserialize_with = "present"
        )]
        email: Option<String>,
        #[serde(default, skip_serializing_if = "MaybeNull::is_absent")]
        phone: MaybeNull<String>,
    }

    #[test]
    fn test_nullable_accepts_null_rejects_missing() {
        let shape: Shape = serde_json::from_value(json!({"description": null})).unwrap();
        assert_eq!(shape.description, None);

        let err = serde_json::from_value::<Shape>(json!({})).unwrap_err();
        assert!(err.to_string().contains("missing field `description`"));
    }

    #[test]
    fn test_present_accepts_missing_rejects_null() {
        let shape: Shape = serde_json::from_value(json!({"description": "d"})).unwrap();
        assert_eq!(shape.email, None);

        let err =
            serde_json::from_value::<Shape>(json!({"description": "d", "email": null})).unwrap_err();
        assert!(err.to_string().contains("invalid type: null"));
    }

    #[test]
    fn test_maybe_null_three_states() {
        let absent: Shape = serde_json::from_value(json!({"description": null})).unwrap();
        assert!(absent.phone.is_absent());

        let null: Shape =
            serde_json::from_value(json!({"description": null, "phone": null})).unwrap();
        assert!(null.phone.is_null());

        let value: Shape =
            serde_json::from_value(json!({"description": null, "phone": "555"})).unwrap();
        assert_eq!(value.phone.as_option().map(String::as_str), Some("555"));
    }

    #[test]
    fn test_round_trip_keeps_absent_and_null_apart() {
        let absent = json!({"description": null});
        let null = json!({"description": null, "phone": null});

        let back = serde_json::to_value(serde_json::from_value::<Shape>(absent.clone()).unwrap())
            .unwrap();
        assert_eq!(back, absent);

        let back =
            serde_json::to_value(serde_json::from_value::<Shape>(null.clone()).unwrap()).unwrap();
        assert_eq!(back, null);
    }
}
