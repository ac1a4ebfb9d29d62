//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Each variant is a distinct, recoverable condition. Translation into transport
/// status codes happens at the HTTP boundary, never here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An entity with the same identifier already exists.
    #[error("{0}")]
    Conflict(String),

    /// The addressed entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A required argument was missing or unusable.
    #[error("{0}")]
    InvalidArgument(String),

    /// A business rule rejected the input (e.g. blank product name).
    #[error("{0}")]
    Validation(String),

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Unexpected failure (e.g. a poisoned lock). Never shown verbatim to clients.
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_message_for_client_facing_variants() {
        assert_eq!(
            DomainError::validation("Product name is required.").to_string(),
            "Product name is required."
        );
        assert_eq!(
            DomainError::conflict("Entity with Id 1 already exists.").to_string(),
            "Entity with Id 1 already exists."
        );
    }

    #[test]
    fn internal_errors_are_prefixed() {
        assert_eq!(
            DomainError::internal("lock poisoned").to_string(),
            "internal error: lock poisoned"
        );
    }
}
