//! Object discriminants and shared field aliases.
//!
//! Every API object carries an `object` literal naming its shape. [`Tag`]
//! is the field type for that literal: it serializes as the literal and
//! refuses to deserialize anything else, so a payload can only decode into
//! the shape it claims to be.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use schemars::r#gen::SchemaGenerator;
use schemars::schema::{InstanceType, Schema, SchemaObject};
use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Caller-defined key/value annotations.
pub type Metadata = HashMap<String, String>;

/// Unix timestamp in seconds.
pub type Timestamp = i64;

/// Convert a wire timestamp into a UTC datetime.
pub fn to_datetime(ts: Timestamp) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

/// A shape identified by an `object` literal.
pub trait Object {
    const OBJECT: &'static str;

    /// `Deleted*` shapes share the literal of the live object and add
    /// `deleted: true`.
    const DELETED: bool = false;
}

/// Objects that carry an `id`.
pub trait HasId {
    fn id(&self) -> &str;
}

/// Implement [`Object`] (and [`HasId`]) for a shape.
#[macro_export]
macro_rules! impl_object {
    ($ty:ty, $object:literal) => {
        impl $crate::object::Object for $ty {
            const OBJECT: &'static str = $object;
        }
    };
    ($ty:ty, $object:literal, id) => {
        $crate::impl_object!($ty, $object);

        impl $crate::object::HasId for $ty {
            fn id(&self) -> &str {
                self.id.as_ref()
            }
        }
    };
    ($ty:ty, $object:literal, deleted) => {
        impl $crate::object::Object for $ty {
            const OBJECT: &'static str = $object;
            const DELETED: bool = true;
        }

        impl $crate::object::HasId for $ty {
            fn id(&self) -> &str {
                self.id.as_ref()
            }
        }
    };
}

/// Read the `object` literal of a raw payload.
pub fn object_of(value: &serde_json::Value) -> Option<&str> {
    value.get("object").and_then(|o| o.as_str())
}

/// Whether a raw payload is a deleted-object stub.
pub fn is_deleted(value: &serde_json::Value) -> bool {
    value
        .get("deleted")
        .and_then(|d| d.as_bool())
        .unwrap_or(false)
}

/// Decode a raw payload as shape `T`, checking its discriminant first.
///
/// Reports a wrong or missing `object` literal as such instead of as a
/// generic field error.
pub fn decode<T>(value: serde_json::Value) -> crate::error::Result<T>
where
    T: Object + serde::de::DeserializeOwned,
{
    let found = object_of(&value).ok_or(crate::Error::MissingObject)?;
    if found != T::OBJECT || is_deleted(&value) != T::DELETED {
        return Err(crate::Error::UnexpectedObject {
            expected: describe(T::OBJECT, T::DELETED),
            found: describe(found, is_deleted(&value)),
        });
    }
    Ok(serde_json::from_value(value)?)
}

/// [`decode`] from JSON text.
pub fn decode_str<T>(json: &str) -> crate::error::Result<T>
where
    T: Object + serde::de::DeserializeOwned,
{
    decode(serde_json::from_str(json)?)
}

fn describe(object: &str, deleted: bool) -> String {
    if deleted {
        format!("deleted {object}")
    } else {
        object.to_string()
    }
}

/// The `object` field of shape `T`.
pub struct Tag<T>(PhantomData<fn() -> T>);

impl<T> Tag<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Object> Tag<T> {
    pub fn as_str(&self) -> &'static str {
        T::OBJECT
    }
}

impl<T> Default for Tag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Tag<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Tag<T> {}

impl<T> PartialEq for Tag<T> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<T> Eq for Tag<T> {}

impl<T: Object> Hash for Tag<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        T::OBJECT.hash(state);
    }
}

impl<T: Object> fmt::Debug for Tag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", T::OBJECT)
    }
}

impl<T: Object> Serialize for Tag<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(T::OBJECT)
    }
}

impl<'de, T: Object> Deserialize<'de> for Tag<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TagVisitor<T>(PhantomData<fn() -> T>);

        impl<T: Object> Visitor<'_> for TagVisitor<T> {
            type Value = Tag<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "the literal {:?}", T::OBJECT)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                if v == T::OBJECT {
                    Ok(Tag::new())
                } else {
                    Err(E::invalid_value(Unexpected::Str(v), &self))
                }
            }
        }

        deserializer.deserialize_str(TagVisitor(PhantomData))
    }
}

impl<T: Object> JsonSchema for Tag<T> {
    fn is_referenceable() -> bool {
        false
    }

    fn schema_name() -> String {
        format!("Tag_{}", T::OBJECT)
    }

    fn json_schema(_: &mut SchemaGenerator) -> Schema {
        SchemaObject {
            instance_type: Some(InstanceType::String.into()),
            const_value: Some(serde_json::Value::String(T::OBJECT.to_string())),
            ..Default::default()
        }
        .into()
    }
}

/// The `deleted: true` literal of deleted-object stubs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DeletedFlag;

impl Serialize for DeletedFlag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(true)
    }
}

impl<'de> Deserialize<'de> for DeletedFlag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if bool::deserialize(deserializer)? {
            Ok(DeletedFlag)
        } else {
            Err(de::Error::invalid_value(
                Unexpected::Bool(false),
                &"the literal true",
            ))
        }
    }
}

impl JsonSchema for DeletedFlag {
    fn is_referenceable() -> bool {
        false
    }

    fn schema_name() -> String {
        "DeletedFlag".to_string()
    }

    fn json_schema(_: &mut SchemaGenerator) -> Schema {
        SchemaObject {
            instance_type: Some(InstanceType::Boolean.into()),
            const_value: Some(serde_json::Value::Bool(true)),
            ..Default::default()
        }
        .into()
    }
}
