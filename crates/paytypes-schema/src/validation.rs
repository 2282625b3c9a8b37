//! Validation of raw payloads against registered shapes.

use crate::registry::{ObjectRegistry, RegisteredObject};
use paytypes_core::Object;
use paytypes_core::object::{is_deleted, object_of};
use schemars::JsonSchema;
use schemars::Map;
use schemars::schema::{InstanceType, Schema, SchemaObject, SingleOrVec};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Reference chains longer than this are treated as unresolvable.
const MAX_REF_DEPTH: usize = 32;

/// A hard validation failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
}

impl ValidationIssue {
    fn new(path: &str, message: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    fn mismatch(path: &str, message: impl Into<String>, expected: String, actual: String) -> Self {
        Self {
            expected: Some(expected),
            actual: Some(actual),
            ..Self::new(path, message)
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "at {}: {}", self.path, self.message)?;
        if let Some(expected) = &self.expected {
            write!(f, "\n  expected: {}", expected)?;
        }
        if let Some(actual) = &self.actual {
            write!(f, "\n  actual: {}", actual)?;
        }
        Ok(())
    }
}

/// Outcome of validating one payload.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Rust shape the payload was checked against, empty if none matched.
    pub type_name: String,
    /// The payload's own `object` literal.
    pub object: Option<String>,
    pub errors: Vec<ValidationIssue>,
    /// Keys the shape does not declare.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// No hard errors.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// No errors and no warnings.
    pub fn is_clean(&self) -> bool {
        self.is_valid() && self.warnings.is_empty()
    }

    /// Whether the payload passes, counting warnings as failures when
    /// `strict`.
    pub fn passes(&self, strict: bool) -> bool {
        if strict { self.is_clean() } else { self.is_valid() }
    }
}

/// Validator for raw payloads.
pub struct PayloadValidator {
    registry: ObjectRegistry,
}

impl PayloadValidator {
    /// Create a validator over `registry`.
    pub fn new(registry: ObjectRegistry) -> Self {
        Self { registry }
    }

    /// Create a validator over every shape in `paytypes-core`.
    pub fn standard() -> Self {
        Self::new(ObjectRegistry::standard())
    }

    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }

    /// Validate a payload against shape `T`.
    pub fn validate<T>(&self, payload: &Value) -> ValidationReport
    where
        T: Object + JsonSchema + DeserializeOwned,
    {
        check(&RegisteredObject::of::<T>(), payload)
    }

    /// Validate a payload against the shape named by its own `object` and
    /// `deleted` fields.
    pub fn validate_object(&self, payload: &Value) -> ValidationReport {
        let Some(object) = object_of(payload) else {
            return ValidationReport {
                errors: vec![ValidationIssue::new("/object", "Missing object discriminant")],
                ..Default::default()
            };
        };

        let deleted = is_deleted(payload);
        match self.registry.get(object, deleted) {
            Some(entry) => check(entry, payload),
            None => {
                let label = if deleted {
                    format!("deleted {object}")
                } else {
                    object.to_string()
                };
                ValidationReport {
                    object: Some(object.to_string()),
                    errors: vec![ValidationIssue::new(
                        "/object",
                        format!("Unknown object type: {label}"),
                    )],
                    ..Default::default()
                }
            }
        }
    }

    /// Validate a payload against a named shape, whatever `object` it
    /// claims to be.
    pub fn validate_as(&self, object: &str, deleted: bool, payload: &Value) -> ValidationReport {
        match self.registry.get(object, deleted) {
            Some(entry) => check(entry, payload),
            None => ValidationReport {
                object: object_of(payload).map(str::to_string),
                errors: vec![ValidationIssue::new(
                    "/",
                    format!("Unknown object type: {object}"),
                )],
                ..Default::default()
            },
        }
    }

    /// Parse JSON text and validate it with [`validate_object`](Self::validate_object).
    pub fn validate_str(&self, json: &str) -> ValidationReport {
        match serde_json::from_str::<Value>(json) {
            Ok(payload) => self.validate_object(&payload),
            Err(e) => ValidationReport {
                errors: vec![ValidationIssue::new("/", format!("Invalid JSON: {e}"))],
                ..Default::default()
            },
        }
    }
}

fn check(entry: &RegisteredObject, payload: &Value) -> ValidationReport {
    let mut report = ValidationReport {
        type_name: entry.short_type_name().to_string(),
        object: object_of(payload).map(str::to_string),
        ..Default::default()
    };

    let found = object_of(payload);
    let deleted = is_deleted(payload);
    if found != Some(entry.object) || deleted != entry.deleted {
        report.errors.push(ValidationIssue::mismatch(
            "/object",
            "Unexpected discriminant",
            entry.label(),
            match found {
                Some(object) if deleted => format!("deleted {object}"),
                Some(object) => object.to_string(),
                None => "absent".to_string(),
            },
        ));
        return report;
    }

    if let Err(e) = entry.decode(payload) {
        report.errors.push(ValidationIssue::new("/", e.to_string()));
    }

    let root = entry.schema();
    let schema = Schema::Object(root.schema);
    let walker = Walker {
        definitions: &root.definitions,
    };
    walker.walk(payload, &schema, "", &mut report.warnings);

    for warning in &report.warnings {
        tracing::warn!(object = entry.object, "{}", warning);
    }
    tracing::debug!(
        object = entry.object,
        type_name = entry.type_name,
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "Validated payload"
    );

    report
}

/// Walks a payload alongside a schema, collecting keys the schema does not
/// declare.
struct Walker<'a> {
    definitions: &'a Map<String, Schema>,
}

impl Walker<'_> {
    fn walk(&self, value: &Value, schema: &Schema, path: &str, warnings: &mut Vec<String>) {
        let Some(obj) = self.resolve(schema) else {
            return;
        };

        if let Some(subschemas) = &obj.subschemas {
            for sub in subschemas.all_of.iter().flatten() {
                self.walk(value, sub, path, warnings);
            }

            let alternatives = subschemas
                .any_of
                .iter()
                .chain(subschemas.one_of.iter())
                .flatten();
            if let Some(best) = self.best_alternative(value, alternatives, path) {
                warnings.extend(best);
            }
        }

        match value {
            Value::Object(map) => {
                let Some(validation) = &obj.object else {
                    return;
                };
                for (key, child) in map {
                    let child_path = format!("{}/{}", path, key);
                    if let Some(prop) = validation.properties.get(key) {
                        self.walk(child, prop, &child_path, warnings);
                    } else if let Some(additional) = &validation.additional_properties {
                        self.walk(child, additional, &child_path, warnings);
                    } else if validation.pattern_properties.is_empty() {
                        warnings.push(format!("{}: unknown field", child_path));
                    }
                }
            }
            Value::Array(items) => {
                let Some(SingleOrVec::Single(item_schema)) =
                    obj.array.as_ref().and_then(|a| a.items.as_ref())
                else {
                    return;
                };
                for (idx, item) in items.iter().enumerate() {
                    self.walk(item, item_schema, &format!("{}/{}", path, idx), warnings);
                }
            }
            _ => {}
        }
    }

    /// Among `anyOf`/`oneOf` branches accepting `value`, the warnings of the
    /// one producing the fewest.
    fn best_alternative<'s>(
        &self,
        value: &Value,
        alternatives: impl Iterator<Item = &'s Schema>,
        path: &str,
    ) -> Option<Vec<String>> {
        alternatives
            .filter(|alt| self.accepts(alt, value))
            .map(|alt| {
                let mut found = Vec::new();
                self.walk(value, alt, path, &mut found);
                found
            })
            .min_by_key(Vec::len)
    }

    /// Shallow type compatibility between a value and a branch.
    fn accepts(&self, schema: &Schema, value: &Value) -> bool {
        let Some(obj) = self.resolve(schema) else {
            return matches!(schema, Schema::Bool(true));
        };

        if let Some(constant) = &obj.const_value {
            return constant == value;
        }
        if let Some(allowed) = &obj.enum_values {
            return allowed.contains(value);
        }
        if let Some(types) = &obj.instance_type {
            let fits = |t: &InstanceType| instance_matches(t, value);
            let ok = match types {
                SingleOrVec::Single(t) => fits(&**t),
                SingleOrVec::Vec(ts) => ts.iter().any(fits),
            };
            if !ok {
                return false;
            }
        }

        // A branch whose `object` literal differs cannot be the payload's shape.
        if let (Value::Object(map), Some(validation)) = (value, &obj.object)
            && let (Some(literal), Some(prop)) = (map.get("object"), validation.properties.get("object"))
            && let Some(expected) = self.resolve(prop).and_then(|p| p.const_value.as_ref())
        {
            return expected == literal;
        }

        true
    }

    fn resolve<'s>(&'s self, schema: &'s Schema) -> Option<&'s SchemaObject> {
        let mut current = schema;
        for _ in 0..MAX_REF_DEPTH {
            let Schema::Object(obj) = current else {
                return None;
            };
            let Some(reference) = &obj.reference else {
                return Some(obj);
            };
            let name = reference.trim_start_matches("#/definitions/");
            current = self.definitions.get(name)?;
        }
        None
    }
}

fn instance_matches(instance: &InstanceType, value: &Value) -> bool {
    match (instance, value) {
        (InstanceType::Null, Value::Null) => true,
        (InstanceType::Boolean, Value::Bool(_)) => true,
        (InstanceType::Number, Value::Number(_)) => true,
        (InstanceType::Integer, Value::Number(n)) => n.is_i64() || n.is_u64(),
        (InstanceType::String, Value::String(_)) => true,
        (InstanceType::Array, Value::Array(_)) => true,
        (InstanceType::Object, Value::Object(_)) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paytypes_core::coupon::{Coupon, DeletedCoupon};
    use paytypes_core::customer::Customer;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn coupon() -> Value {
        json!({
            "id": "25OFF",
            "object": "coupon",
            "amount_off": null,
            "created": 1680000000,
            "currency": null,
            "duration": "repeating",
            "duration_in_months": 3,
            "livemode": false,
            "max_redemptions": null,
            "metadata": {},
            "name": "25% off",
            "percent_off": 25.0,
            "redeem_by": null,
            "times_redeemed": 0,
            "valid": true
        })
    }

    fn validator() -> PayloadValidator {
        PayloadValidator::new(crate::objects!(Coupon, DeletedCoupon, Customer))
    }

    #[test]
    fn test_valid_coupon() {
        let report = validator().validate::<Coupon>(&coupon());
        assert!(report.is_clean(), "{:?}", report);
        assert_eq!(report.type_name, "Coupon");
        assert_eq!(report.object.as_deref(), Some("coupon"));
    }

    #[test]
    fn test_literal_outside_set_is_error() {
        let mut payload = coupon();
        payload["duration"] = json!("weekly");

        let report = validator().validate_object(&payload);
        assert!(!report.is_valid());
        assert!(report.errors[0].message.contains("weekly"));
    }

    #[test]
    fn test_discriminant_mismatch() {
        let report = validator().validate::<Customer>(&coupon());
        assert_eq!(report.errors.len(), 1);
        let issue = &report.errors[0];
        assert_eq!(issue.path, "/object");
        assert_eq!(issue.expected.as_deref(), Some("customer"));
        assert_eq!(issue.actual.as_deref(), Some("coupon"));
    }

    #[test]
    fn test_unknown_field_is_warning() {
        let mut payload = coupon();
        payload["sparkle"] = json!(true);

        let report = validator().validate_object(&payload);
        assert!(report.is_valid());
        assert!(!report.is_clean());
        assert_eq!(report.warnings, vec!["/sparkle: unknown field".to_string()]);
        assert!(report.passes(false));
        assert!(!report.passes(true));
    }

    #[test]
    fn test_metadata_keys_are_not_unknown() {
        let mut payload = coupon();
        payload["metadata"] = json!({"campaign": "spring"});

        let report = validator().validate_object(&payload);
        assert!(report.is_clean(), "{:?}", report.warnings);
    }

    #[test]
    fn test_dispatch_on_deleted_flag() {
        let stub = json!({"id": "25OFF", "object": "coupon", "deleted": true});
        let report = validator().validate_object(&stub);
        assert!(report.is_clean());
        assert_eq!(report.type_name, "DeletedCoupon");
    }

    #[test]
    fn test_missing_and_unknown_discriminant() {
        let report = validator().validate_object(&json!({"id": "x"}));
        assert_eq!(report.errors[0].message, "Missing object discriminant");

        let report = validator().validate_object(&json!({"id": "x", "object": "quote"}));
        assert_eq!(report.errors[0].message, "Unknown object type: quote");
    }

    #[test]
    fn test_validate_str_rejects_bad_json() {
        let report = validator().validate_str("{not json");
        assert!(!report.is_valid());
        assert!(report.errors[0].message.starts_with("Invalid JSON"));
    }

    #[test]
    fn test_issue_display() {
        let issue = ValidationIssue::mismatch(
            "/object",
            "Unexpected discriminant",
            "customer".into(),
            "coupon".into(),
        );
        assert_eq!(
            issue.to_string(),
            "at /object: Unexpected discriminant\n  expected: customer\n  actual: coupon"
        );
    }
}
