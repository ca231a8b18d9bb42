//! Storage traits (ports) - define the interface for message storage
//!
//! The orchestration layer defines what it needs from its collaborators;
//! the infrastructure crates provide the implementations.

use async_trait::async_trait;

use crate::entities::{Message, NewMessage, NewReaction, Reaction};
use crate::error::StoreError;

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

// ============================================================================
// Durable store
// ============================================================================

/// The durable message store, the single source of truth.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// List persisted messages, newest first, skipping the first `offset`
    /// rows and returning at most `limit` rows. A non-positive `limit`
    /// yields an empty page.
    async fn list_messages(&self, offset: i64, limit: i64) -> StoreResult<Vec<Message>>;

    /// Persist a message, returning it with store-assigned id and timestamp.
    async fn insert_message(&self, new: NewMessage) -> StoreResult<Message>;

    /// Persist a reaction. Backends without reaction storage report
    /// [`StoreError::Unsupported`].
    async fn insert_reaction(&self, new: NewReaction) -> StoreResult<Reaction>;
}

// ============================================================================
// Recent-messages cache
// ============================================================================

/// A bounded cache holding the most recent messages.
#[async_trait]
pub trait MessageCache: Send + Sync {
    /// List up to `limit` of the most recent messages, newest first. May
    /// return fewer than `limit`, never more.
    async fn list_messages(&self, limit: i64) -> StoreResult<Vec<Message>>;

    /// Record a just-persisted message as the most recent one.
    async fn insert_message(&self, message: &Message) -> StoreResult<()>;
}
