//! JSON Schema export.

use crate::error::{Result, SchemaError};
use crate::registry::{ObjectRegistry, RegisteredObject};
use schemars::schema::RootSchema;
use std::path::Path;

/// The schema of a registered shape.
pub fn schema_for_object(
    registry: &ObjectRegistry,
    object: &str,
    deleted: bool,
) -> Result<RootSchema> {
    registry
        .get(object, deleted)
        .map(RegisteredObject::schema)
        .ok_or_else(|| {
            SchemaError::UnknownObject(if deleted {
                format!("deleted {object}")
            } else {
                object.to_string()
            })
        })
}

/// File name an entry's schema is written under.
pub fn file_name(entry: &RegisteredObject) -> String {
    if entry.deleted {
        format!("deleted_{}.json", entry.object)
    } else {
        format!("{}.json", entry.object)
    }
}

/// Write every registered schema into `dir`, returning the number written.
pub fn export_all(registry: &ObjectRegistry, dir: &Path) -> Result<usize> {
    std::fs::create_dir_all(dir)?;

    let mut written = 0;
    for entry in registry.entries() {
        let json = serde_json::to_string_pretty(&entry.schema())
            .map_err(|e| SchemaError::ExportError(format!("{}: {}", entry.object, e)))?;
        let path = dir.join(file_name(entry));
        std::fs::write(&path, json)?;
        tracing::debug!(path = %path.display(), "Wrote schema");
        written += 1;
    }

    tracing::info!(count = written, dir = %dir.display(), "Exported schemas");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use paytypes_core::coupon::{Coupon, DeletedCoupon};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_schema_for_object() {
        let registry = crate::objects!(Coupon);
        let schema = schema_for_object(&registry, "coupon", false).unwrap();
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["title"], "Coupon");
        assert_eq!(json["properties"]["object"]["const"], "coupon");

        let err = schema_for_object(&registry, "coupon", true).unwrap_err();
        assert_eq!(err.to_string(), "Unknown object type: deleted coupon");
    }

    #[test]
    fn test_export_all() {
        let registry = crate::objects!(Coupon, DeletedCoupon);
        let dir = tempfile::tempdir().unwrap();

        let count = export_all(&registry, dir.path()).unwrap();
        assert_eq!(count, 2);
        assert!(dir.path().join("coupon.json").exists());

        let text = std::fs::read_to_string(dir.path().join("deleted_coupon.json")).unwrap();
        let schema: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(schema["title"], "DeletedCoupon");
    }
}
