//! Reaction entity - represents a reaction on a message

use chrono::{DateTime, Utc};

/// Reaction entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: String,
    pub message_id: String,
    pub kind: String,
    pub score: i64,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a Reaction from store-assigned fields
    pub fn new(
        id: String,
        message_id: String,
        kind: String,
        score: i64,
        user_id: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            message_id,
            kind,
            score,
            user_id,
            created_at,
        }
    }
}

/// Input for reaction creation
///
/// Like [`NewMessage`](crate::entities::NewMessage), carries no id or
/// timestamp; the durable store assigns those.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReaction {
    pub message_id: String,
    pub kind: String,
    pub score: i64,
    pub user_id: String,
}

impl NewReaction {
    /// Create a new NewReaction
    pub fn new(message_id: String, kind: String, score: i64, user_id: String) -> Self {
        Self {
            message_id,
            kind,
            score,
            user_id,
        }
    }
}
