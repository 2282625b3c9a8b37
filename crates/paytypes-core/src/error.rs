//! Error types for paytypes.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unexpected discriminant: expected \"{expected}\", found \"{found}\"")]
    UnexpectedObject { expected: String, found: String },

    #[error("Missing object discriminant")]
    MissingObject,

    #[error("Unknown {kind} literal: {value}")]
    UnknownLiteral { kind: &'static str, value: String },

    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
