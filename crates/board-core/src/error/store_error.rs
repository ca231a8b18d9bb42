//! Storage errors - shared failure type of the durable store and the cache

use thiserror::Error;

/// Failures reported by storage collaborators
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backend could not be reached or the query failed.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// A write was rejected by a data constraint.
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// The backend does not implement this operation.
    #[error("Operation not supported: {0}")]
    Unsupported(&'static str),
}

impl StoreError {
    /// Check if this is an "operation not supported" error
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}
