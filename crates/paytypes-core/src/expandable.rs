//! Expandable references.
//!
//! A related object arrives either as its id or, when the request asked for
//! it to be expanded, as the full object.

use crate::object::HasId;
use schemars::JsonSchema;
use serde::de::value::MapAccessDeserializer;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::marker::PhantomData;

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum Expandable<T> {
    Id(String),
    Object(Box<T>),
}

impl<T> Expandable<T> {
    pub fn is_object(&self) -> bool {
        matches!(self, Expandable::Object(_))
    }

    pub fn as_object(&self) -> Option<&T> {
        match self {
            Expandable::Object(o) => Some(o),
            Expandable::Id(_) => None,
        }
    }

    pub fn into_object(self) -> Option<T> {
        match self {
            Expandable::Object(o) => Some(*o),
            Expandable::Id(_) => None,
        }
    }
}

impl<T: HasId> Expandable<T> {
    /// The referenced id, whether or not the object was expanded.
    pub fn id(&self) -> &str {
        match self {
            Expandable::Id(id) => id,
            Expandable::Object(o) => o.id(),
        }
    }
}

impl<T> From<T> for Expandable<T> {
    fn from(object: T) -> Self {
        Expandable::Object(Box::new(object))
    }
}

// Hand-written so that a malformed expanded object reports its own error
// instead of "did not match any variant".
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Expandable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ExpandableVisitor<T>(PhantomData<fn() -> T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for ExpandableVisitor<T> {
            type Value = Expandable<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object id or an expanded object")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(Expandable::Id(v.to_owned()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(Expandable::Id(v))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                T::deserialize(MapAccessDeserializer::new(map))
                    .map(|object| Expandable::Object(Box::new(object)))
            }
        }

        deserializer.deserialize_any(ExpandableVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Tag;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Thing {
        id: String,
        object: Tag<Thing>,
    }
    crate::impl_object!(Thing, "thing", id);

    #[test]
    fn test_id_form() {
        let r: Expandable<Thing> = serde_json::from_value(json!("thg_1")).unwrap();
        assert!(!r.is_object());
        assert_eq!(r.id(), "thg_1");
    }

    #[test]
    fn test_object_form() {
        let r: Expandable<Thing> =
            serde_json::from_value(json!({"id": "thg_1", "object": "thing"})).unwrap();
        assert!(r.is_object());
        assert_eq!(r.id(), "thg_1");
        assert_eq!(
            serde_json::to_value(&r).unwrap(),
            json!({"id": "thg_1", "object": "thing"})
        );
    }

    #[test]
    fn test_wrong_object_reports_discriminant() {
        let err = serde_json::from_value::<Expandable<Thing>>(json!({"id": "x", "object": "other"}))
            .unwrap_err();
        assert!(err.to_string().contains("\"thing\""));
    }

    #[test]
    fn test_rejects_numbers() {
        assert!(serde_json::from_value::<Expandable<Thing>>(json!(42)).is_err());
    }
}
