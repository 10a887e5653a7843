//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be one of {allowed:?}, got {actual}")]
    NotAllowed {
        field: String,
        allowed: &'static [i32],
        actual: i32,
    },

    #[error("Field '{field}' is out of range: {actual}")]
    OutOfRange { field: String, actual: i64 },
}

impl ValidationError {
    /// Creates a not-allowed value validation error.
    pub fn not_allowed(field: impl Into<String>, allowed: &'static [i32], actual: i32) -> Self {
        ValidationError::NotAllowed {
            field: field.into(),
            allowed,
            actual,
        }
    }

    /// Creates an out-of-range validation error.
    pub fn out_of_range(field: impl Into<String>, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            actual,
        }
    }
}

/// Failure to produce a zone catalog from a snapshot.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Snapshot unreadable at {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Snapshot is not a valid zone list: {0}")]
    Malformed(String),
}

/// Failure reported by, or while decoding rows from, the portal store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Portal store unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid portal row: {0}")]
    InvalidRow(String),

    #[error("Invalid stored timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },
}

impl StoreError {
    /// Wraps a collaborator failure, prefixed with the operation that hit it.
    pub fn unavailable(operation: &str, err: impl std::fmt::Display) -> Self {
        StoreError::Unavailable(format!("{}: {}", operation, err))
    }
}
