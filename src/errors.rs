//! Error types for store and configuration operations

use thiserror::Error;

use crate::domain::EntityKind;

/// Errors that can occur in store operations
///
/// Absence of an entity is never an error: lookups return `Option`.
/// A failed operation leaves the store exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Malformed or missing input
    #[error("Validation error: {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    /// The operation referenced an entity that does not exist
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// The operation would break a one-per-scope rule
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl StoreError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        StoreError::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn not_found(kind: EntityKind, id: impl ToString) -> Self {
        StoreError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while loading server configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("Configuration error: {name}={value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_names_field() {
        let err = StoreError::validation("per_page", "not a number");
        assert_eq!(err.to_string(), "Validation error: per_page: not a number");
    }

    #[test]
    fn test_not_found_display() {
        let err = StoreError::not_found(EntityKind::Device, "abc");
        assert_eq!(err.to_string(), "device not found: abc");
    }
}
