//! Conversion error types.

use thiserror::Error;

/// Errors raised while turning a Postman export into a Bruno collection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The `info.schema` URL is missing or names an unsupported version.
    #[error("Unsupported Postman schema version. Only Postman Collection v2.0 and v2.1 are supported.")]
    UnsupportedSchema,

    /// The document matched a v2.x schema but could not be converted.
    #[error("Import collection failed: {0}")]
    Conversion(String),

    /// The document is not a Postman environment export.
    #[error("Invalid Postman environment file")]
    InvalidEnvironment,
}

/// Result type alias for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
