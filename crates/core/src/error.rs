//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// duplicates, missing targets). Display concerns belong to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation. Carries the fixed constraint message of the value type.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A mutation would have introduced a duplicate entry; nothing was changed.
    #[error("duplicate entry: {0}")]
    Duplicate(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The targeted entry does not exist.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Duplicate(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// The user-facing constraint message for validation failures.
    pub fn constraint_message(&self) -> Option<&str> {
        match self {
            DomainError::Validation(msg) => Some(msg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_keeps_constraint_message_verbatim() {
        let err = DomainError::validation("Person addresses can be in any format");
        assert_eq!(
            err.constraint_message(),
            Some("Person addresses can be in any format")
        );
        assert_eq!(
            err.to_string(),
            "validation failed: Person addresses can be in any format"
        );
    }

    #[test]
    fn non_validation_errors_have_no_constraint_message() {
        assert_eq!(DomainError::not_found().constraint_message(), None);
        assert_eq!(DomainError::duplicate("x").constraint_message(), None);
        assert_eq!(DomainError::duplicate("x").to_string(), "duplicate entry: x");
    }
}
