//! Polymorphic payloads discriminated by `object`.
//!
//! Fields such as a charge's `source` or an event's `data.object` hold one
//! of several shapes. [`object_union!`](crate::object_union) declares the
//! sum type and decodes it by reading the payload's `object` literal and
//! `deleted` flag, then handing the payload to the matching shape.

/// Declare an enum over [`Object`](crate::object::Object) shapes.
///
/// Every variant type must implement `Object`, `HasId`, `Serialize`,
/// `DeserializeOwned` and `JsonSchema`. No two variants may share the same
/// `(OBJECT, DELETED)` pair. A leading `#![without_id]` drops the `HasId`
/// requirement (and impl) for unions that hold id-less shapes.
#[macro_export]
macro_rules! object_union {
    (
        @decl
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $variant:ident($ty:ty) ),+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $( $variant($ty), )+
        }

        impl $name {
            /// The `object` literal of the held shape.
            pub fn object(&self) -> &'static str {
                match self {
                    $( $name::$variant(_) => <$ty as $crate::object::Object>::OBJECT, )+
                }
            }

            pub fn is_deleted(&self) -> bool {
                match self {
                    $( $name::$variant(_) => <$ty as $crate::object::Object>::DELETED, )+
                }
            }
        }

        $(
            impl From<$ty> for $name {
                fn from(inner: $ty) -> Self {
                    $name::$variant(inner)
                }
            }
        )+

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                match self {
                    $( $name::$variant(inner) => $crate::__private::serde::Serialize::serialize(inner, serializer), )+
                }
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                use $crate::__private::serde::de::Error as _;

                let value: $crate::__private::serde_json::Value =
                    $crate::__private::serde::Deserialize::deserialize(deserializer)?;
                let object = $crate::object::object_of(&value)
                    .ok_or_else(|| D::Error::missing_field("object"))?
                    .to_owned();
                let deleted = $crate::object::is_deleted(&value);

                $(
                    if object == <$ty as $crate::object::Object>::OBJECT
                        && deleted == <$ty as $crate::object::Object>::DELETED
                    {
                        return $crate::__private::serde_json::from_value::<$ty>(value)
                            .map($name::$variant)
                            .map_err(D::Error::custom);
                    }
                )+

                Err(D::Error::custom(format!(
                    "unknown object type for {}: {}{}",
                    stringify!($name),
                    if deleted { "deleted " } else { "" },
                    object
                )))
            }
        }

        impl $crate::__private::schemars::JsonSchema for $name {
            fn schema_name() -> String {
                stringify!($name).to_string()
            }

            fn json_schema(
                generator: &mut $crate::__private::schemars::r#gen::SchemaGenerator,
            ) -> $crate::__private::schemars::schema::Schema {
                use $crate::__private::schemars::schema::{SchemaObject, SubschemaValidation};

                SchemaObject {
                    subschemas: Some(Box::new(SubschemaValidation {
                        any_of: Some(vec![ $( generator.subschema_for::<$ty>(), )+ ]),
                        ..Default::default()
                    })),
                    ..Default::default()
                }
                .into()
            }
        }
    };
    (
        #![without_id]
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $variant:ident($ty:ty) ),+ $(,)?
        }
    ) => {
        $crate::object_union!(@decl $(#[$meta])* $vis enum $name { $( $variant($ty) ),+ });
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $variant:ident($ty:ty) ),+ $(,)?
        }
    ) => {
        $crate::object_union!(@decl $(#[$meta])* $vis enum $name { $( $variant($ty) ),+ });

        impl $crate::object::HasId for $name {
            fn id(&self) -> &str {
                match self {
                    $( $name::$variant(inner) => $crate::object::HasId::id(inner), )+
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::object::{DeletedFlag, HasId, Tag};
    use schemars::JsonSchema;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
    struct Apple {
        id: String,
        object: Tag<Apple>,
        crisp: bool,
    }
    crate::impl_object!(Apple, "apple", id);

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
    struct DeletedApple {
        id: String,
        object: Tag<Apple>,
        deleted: DeletedFlag,
    }
    crate::impl_object!(DeletedApple, "apple", deleted);

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
    struct Pear {
        id: String,
        object: Tag<Pear>,
    }
    crate::impl_object!(Pear, "pear", id);

    crate::object_union! {
        enum Fruit {
            Apple(Apple),
            DeletedApple(DeletedApple),
            Pear(Pear),
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
    struct Basket {
        object: Tag<Basket>,
        capacity: u32,
    }
    crate::impl_object!(Basket, "basket");

    crate::object_union! {
        #![without_id]
        enum Holder {
            Basket(Basket),
            Pear(Pear),
        }
    }

    #[test]
    fn test_union_without_ids() {
        let holder: Holder =
            serde_json::from_value(json!({"object": "basket", "capacity": 3})).unwrap();
        assert_eq!(holder.object(), "basket");
        assert!(matches!(holder, Holder::Basket(Basket { capacity: 3, .. })));
    }

    #[test]
    fn test_dispatch_on_object() {
        let fruit: Fruit = serde_json::from_value(json!({"id": "p1", "object": "pear"})).unwrap();
        assert!(matches!(fruit, Fruit::Pear(_)));
        assert_eq!(fruit.object(), "pear");
        assert_eq!(fruit.id(), "p1");
    }

    #[test]
    fn test_dispatch_on_deleted_flag() {
        let live: Fruit =
            serde_json::from_value(json!({"id": "a1", "object": "apple", "crisp": true})).unwrap();
        assert!(!live.is_deleted());

        let gone: Fruit =
            serde_json::from_value(json!({"id": "a1", "object": "apple", "deleted": true}))
                .unwrap();
        assert!(gone.is_deleted());
        assert!(matches!(gone, Fruit::DeletedApple(_)));
    }

    #[test]
    fn test_unknown_and_missing_object() {
        let err = serde_json::from_value::<Fruit>(json!({"id": "x", "object": "plum"})).unwrap_err();
        assert!(err.to_string().contains("unknown object type for Fruit: plum"));

        let err = serde_json::from_value::<Fruit>(json!({"id": "x"})).unwrap_err();
        assert!(err.to_string().contains("missing field `object`"));
    }

    #[test]
    fn test_serializes_inner_shape() {
        let fruit = Fruit::from(Pear {
            id: "p1".into(),
            object: Tag::new(),
        });
        assert_eq!(
            serde_json::to_value(&fruit).unwrap(),
            json!({"id": "p1", "object": "pear"})
        );
    }
}
