//! Schema tooling errors.

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Unknown object type: {0}")]
    UnknownObject(String),

    #[error("Export error: {0}")]
    ExportError(String),
}

pub type Result<T> = std::result::Result<T, SchemaError>;

impl From<std::io::Error> for SchemaError {
    fn from(err: std::io::Error) -> Self {
        SchemaError::IoError(err.to_string())
    }
}
