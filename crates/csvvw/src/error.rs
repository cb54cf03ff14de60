//! Error types for the csvvw library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for csvvw operations.
#[derive(Debug, Error)]
pub enum CsvVwError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error writing transcoded output.
    #[error("Write error: {0}")]
    Write(#[source] std::io::Error),

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No data rows to sample for type inference.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// A row whose column count does not match the header.
    #[error("Malformed row {row}: expected {expected} columns, found {found}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A type override names a column that is not in the header.
    #[error("Type override for unknown column '{column}'")]
    UnknownTypeOverride { column: String },

    /// A field type name that is not one of int, float or str.
    #[error("Unknown field type: {0}")]
    UnknownFieldType(String),

    /// Invalid delimiter detected or specified.
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for csvvw operations.
pub type Result<T> = std::result::Result<T, CsvVwError>;
