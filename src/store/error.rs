//! Entity store error types
//!
//! Defines all errors that can occur in the store layer. Validation and
//! conflict variants carry the offending field name so the API layer can
//! build field-keyed 400 responses.

use thiserror::Error;

/// Errors that can occur in the entity store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying SQLite failure
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// I/O operation failed (database directory creation etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A write violated a field-level validation rule
    #[error("Validation failed on '{field}': {message}")]
    Validation { field: String, message: String },

    /// A write violated a uniqueness constraint
    #[error("Conflict on '{field}': {message}")]
    Conflict { field: String, message: String },

    /// Requested entity does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A filter predicate referenced a target the store does not know
    #[error("Unknown filter target: {0}")]
    UnknownFilterTarget(String),
}

impl StoreError {
    /// Validation error keyed by field name
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        StoreError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Uniqueness conflict keyed by field name
    pub fn conflict(field: impl Into<String>, message: impl Into<String>) -> Self {
        StoreError::Conflict {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Not-found error for an entity kind
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity,
            id: id.into(),
        }
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::not_found("Quote", "abc");
        assert_eq!(err.to_string(), "Quote not found: abc");

        let err = StoreError::validation("text", "Must contain at least 3 words.");
        assert_eq!(
            err.to_string(),
            "Validation failed on 'text': Must contain at least 3 words."
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let store_err: StoreError = io_err.into();
        assert!(matches!(store_err, StoreError::Io(_)));
    }
}
