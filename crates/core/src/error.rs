//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable by the caller: operations validate before they
/// mutate, so a returned error always means "nothing changed".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An item with the same identifier is already active.
    #[error("item ID already exists: {0}")]
    DuplicateId(String),

    /// Another item already uses this name.
    ///
    /// Advisory only: the caller is expected to ask for confirmation and retry
    /// with the duplicate acknowledged.
    #[error("an item with the name '{0}' already exists")]
    DuplicateNameWarning(String),

    /// No record matched the requested identifier.
    #[error("not found: {0}")]
    NotFound(String),

    /// A value failed validation (malformed integer, negative amount, bad date).
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

impl DomainError {
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId(id.into())
    }

    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateNameWarning(name.into())
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    /// True for conditions that need user confirmation rather than a hard stop.
    pub fn is_advisory(&self) -> bool {
        matches!(self, Self::DuplicateNameWarning(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_duplicate_name_is_advisory() {
        assert!(DomainError::duplicate_name("Sunlight").is_advisory());
        assert!(!DomainError::duplicate_id("SKU001").is_advisory());
        assert!(!DomainError::not_found("SKU001").is_advisory());
        assert!(!DomainError::invalid("x").is_advisory());
    }

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            DomainError::duplicate_id("SKU001").to_string(),
            "item ID already exists: SKU001"
        );
        assert_eq!(
            DomainError::duplicate_name("Sunlight").to_string(),
            "an item with the name 'Sunlight' already exists"
        );
        assert_eq!(DomainError::not_found("SKU404").to_string(), "not found: SKU404");
    }
}
