//! CLI error types.

use thiserror::Error;

/// Errors surfaced by the command-line layer.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file or directory does not exist.
    #[error("Input not found: {0}")]
    InputNotFound(String),

    /// The input file is not valid JSON.
    #[error("Failed to parse input file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The collection is missing its `info.name`.
    #[error("Invalid Postman collection - missing info.name")]
    MissingName,

    /// Conversion rejected the document.
    #[error("Conversion failed: {0}")]
    Convert(#[from] postbru_convert::ConvertError),

    /// Reading input or writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A batch run stopped at its first failed collection.
    #[error("Batch aborted; use --continue-on-error to skip failed collections")]
    BatchAborted,
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
