//! Error types for the ledger
//!
//! One error enum for the whole crate, defined with thiserror. Every failure
//! is recoverable: the shell prints it and keeps running.

use thiserror::Error;

use crate::models::{Money, RecordKind};

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for input data
    #[error("Validation error: {0}")]
    Validation(String),

    /// A date string did not match the canonical `YYYY-MM-DD` form
    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },

    /// An expense would push the balance below zero
    #[error("Insufficient funds: need {requested}, have {available}")]
    InsufficientFunds { requested: Money, available: Money },

    /// A category name is not registered for the given record kind
    #[error("Unknown {kind} category: '{name}'")]
    UnknownCategory { kind: RecordKind, name: String },

    /// The record file exists but could not be decoded
    #[error("Record store {path} is corrupt: {detail}")]
    CorruptStore { path: String, detail: String },

    /// Storage errors (writes, renames, directory creation)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this failure means the durable store could not be decoded
    pub fn is_corrupt_store(&self) -> bool {
        matches!(self, Self::CorruptStore { .. })
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_display() {
        let err = LedgerError::InvalidDate {
            input: "2024-13-40".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid date '2024-13-40': expected YYYY-MM-DD"
        );
    }

    #[test]
    fn test_insufficient_funds_display() {
        let err = LedgerError::InsufficientFunds {
            requested: Money::from_cents(80000),
            available: Money::from_cents(70000),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: need 800.00, have 700.00"
        );
    }

    #[test]
    fn test_unknown_category_display() {
        let err = LedgerError::UnknownCategory {
            kind: RecordKind::Expense,
            name: "Yachts".into(),
        };
        assert_eq!(err.to_string(), "Unknown Expense category: 'Yachts'");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LedgerError = io_err.into();
        assert!(matches!(err, LedgerError::Io(_)));
    }

    #[test]
    fn test_is_corrupt_store() {
        let err = LedgerError::CorruptStore {
            path: "records.json".into(),
            detail: "expected value".into(),
        };
        assert!(err.is_corrupt_store());
        assert!(!err.is_validation());
    }
}
