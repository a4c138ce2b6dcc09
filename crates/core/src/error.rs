//! Domain error model.

use core::fmt::Display;

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Both variants are precondition violations on the identifier space. They are
/// returned to the immediate caller as-is; nothing retries or recovers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An element with the same identifier is already stored.
    #[error("Element with id: {0} already exists")]
    AlreadyExists(String),

    /// No element with the requested identifier is stored.
    #[error("Element with id: {0} not found")]
    NotFound(String),
}

impl DomainError {
    pub fn already_exists(id: impl Display) -> Self {
        Self::AlreadyExists(id.to_string())
    }

    pub fn not_found(id: impl Display) -> Self {
        Self::NotFound(id.to_string())
    }
}
