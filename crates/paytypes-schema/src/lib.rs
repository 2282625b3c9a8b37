//! Paytypes Schema
//!
//! Conformance tooling for the payload shapes in `paytypes-core`:
//!
//! 1. **Registry**: map `object` literals to their Rust shapes
//! 2. **Validation**: check raw payloads against a shape, reporting hard
//!    errors separately from unknown-field warnings
//! 3. **Export**: write the JSON Schema of every registered shape
//!
//! ## Usage
//!
//! ```rust,ignore
//! use paytypes_schema::PayloadValidator;
//!
//! let validator = PayloadValidator::standard();
//! let report = validator.validate_str(r#"{"object": "coupon", ...}"#);
//! assert!(report.is_valid());
//! ```

pub mod error;
pub mod export;
pub mod registry;
pub mod validation;

pub use error::{Result, SchemaError};
pub use export::{export_all, schema_for_object};
pub use registry::{ObjectRegistry, RegisteredObject};
pub use validation::{PayloadValidator, ValidationIssue, ValidationReport};
