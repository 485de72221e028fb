//! Domain-level error types.

use thiserror::Error;

use crate::domain::PostId;

/// Domain errors - business logic failures.
///
/// None of these are fatal: an operation that fails leaves the collection
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A required field is missing or empty, or a date is malformed.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// An unsupported sort field or direction.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Post with id {id} not found.")]
    NotFound { id: PostId },
}

impl DomainError {
    pub fn not_found(id: PostId) -> Self {
        Self::NotFound { id }
    }
}
