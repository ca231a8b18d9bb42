//! Service layer error types

use board_core::StoreError;
use thiserror::Error;

/// Service layer error type
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A storage collaborator failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Reaction persistence is not available for this message
    #[error("could not create reaction for message with id {message_id}")]
    ReactionUnsupported { message_id: String },
}

impl ServiceError {
    /// Create a reaction-unsupported error for a message id
    pub fn reaction_unsupported(message_id: impl Into<String>) -> Self {
        Self::ReactionUnsupported {
            message_id: message_id.into(),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
