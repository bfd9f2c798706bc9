//! Error types for Credvault Core

use std::fmt;
use thiserror::Error;

/// Main error type for vault operations
#[derive(Error, Debug)]
pub enum VaultError {
    /// Persistence backend failed to read or write
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Stored data could not be parsed as a record list
    #[error("Corrupt data: {0}")]
    CorruptData(String),

    /// Record list could not be serialized
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Record not found
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// One or more required fields are missing
    #[error("Validation failed: {}", join_field_errors(.0))]
    Validation(Vec<FieldError>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<rusqlite::Error> for VaultError {
    fn from(err: rusqlite::Error) -> Self {
        VaultError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for VaultError {
    fn from(err: serde_json::Error) -> Self {
        VaultError::SerializationError(err.to_string())
    }
}

/// A single failed form field with its inline message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name (`title`, `username`, `password`)
    pub field: &'static str,
    /// Message shown next to the field
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for vault operations
pub type Result<T> = std::result::Result<T, VaultError>;
