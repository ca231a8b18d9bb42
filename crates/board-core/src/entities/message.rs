//! Message entity - represents a board message

use chrono::{DateTime, Utc};

/// Message entity
///
/// A message as the durable store returned it. `id` and `created_at` exist
/// only once the store has assigned them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a Message from store-assigned fields
    pub fn new(id: String, text: String, user_id: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            user_id,
            created_at,
        }
    }
}

/// Input for message creation
///
/// Deliberately has no id or timestamp fields; only the durable store
/// assigns those.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub text: String,
    pub user_id: String,
}

impl NewMessage {
    /// Create a new NewMessage
    pub fn new(text: String, user_id: String) -> Self {
        Self { text, user_id }
    }
}
