//! Test fixtures: stub storage backends and wire-format bodies
//!
//! The stubs implement the storage traits with canned results and record
//! every call, so tests can assert both the HTTP outcome and which
//! collaborator was consulted.

use std::sync::Arc;

use async_trait::async_trait;
use board_core::entities::{Message, NewMessage, NewReaction, Reaction};
use board_core::traits::{MessageCache, MessageStore, StoreResult};
use board_core::StoreError;
use chrono::{DateTime, Duration, TimeZone, Utc};
use parking_lot::Mutex;
use serde::Deserialize;

/// Id the stub store assigns to every inserted message
pub const STORE_ASSIGNED_ID: &str = "m-100";

/// Fixed timestamp base for test data: 2024-01-01 00:00:00 UTC plus `secs`
pub fn timestamp(secs: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(secs)
}

/// Build a message fixture
pub fn message(id: &str, text: &str, user_id: &str, secs: i64) -> Message {
    Message::new(
        id.to_string(),
        text.to_string(),
        user_id.to_string(),
        timestamp(secs),
    )
}

// ============================================================================
// Stub durable store
// ============================================================================

/// Stub durable store with canned results and recorded calls
pub struct StubMessageStore {
    list: Result<Vec<Message>, StoreError>,
    insert_error: Option<StoreError>,
    pub list_calls: Mutex<Vec<(i64, i64)>>,
    pub inserted: Mutex<Vec<NewMessage>>,
    pub reaction_inserts: Mutex<Vec<NewReaction>>,
}

impl StubMessageStore {
    fn build(list: Result<Vec<Message>, StoreError>, insert_error: Option<StoreError>) -> Arc<Self> {
        Arc::new(Self {
            list,
            insert_error,
            list_calls: Mutex::new(Vec::new()),
            inserted: Mutex::new(Vec::new()),
            reaction_inserts: Mutex::new(Vec::new()),
        })
    }

    /// A store holding the given messages
    pub fn with_messages(messages: Vec<Message>) -> Arc<Self> {
        Self::build(Ok(messages), None)
    }

    /// An empty store
    pub fn empty() -> Arc<Self> {
        Self::build(Ok(Vec::new()), None)
    }

    /// A store where every operation fails
    pub fn failing() -> Arc<Self> {
        let err = StoreError::Unavailable("database down".to_string());
        Self::build(Err(err.clone()), Some(err))
    }

    /// A store that lists fine but rejects inserts
    pub fn failing_inserts() -> Arc<Self> {
        let err = StoreError::Unavailable("database down".to_string());
        Self::build(Ok(Vec::new()), Some(err))
    }
}

#[async_trait]
impl MessageStore for StubMessageStore {
    async fn list_messages(&self, offset: i64, limit: i64) -> StoreResult<Vec<Message>> {
        self.list_calls.lock().push((offset, limit));
        self.list.clone()
    }

    async fn insert_message(&self, new: NewMessage) -> StoreResult<Message> {
        self.inserted.lock().push(new.clone());
        if let Some(err) = &self.insert_error {
            return Err(err.clone());
        }
        // The store is the one that assigns identity
        Ok(Message::new(
            STORE_ASSIGNED_ID.to_string(),
            new.text,
            new.user_id,
            timestamp(100),
        ))
    }

    async fn insert_reaction(&self, new: NewReaction) -> StoreResult<Reaction> {
        self.reaction_inserts.lock().push(new);
        Err(StoreError::Unsupported("reaction storage"))
    }
}

// ============================================================================
// Stub cache
// ============================================================================

/// Stub recent-messages cache with canned results and recorded calls
pub struct StubMessageCache {
    list: Result<Vec<Message>, StoreError>,
    insert_error: Option<StoreError>,
    pub list_calls: Mutex<Vec<i64>>,
    pub inserted: Mutex<Vec<Message>>,
}

impl StubMessageCache {
    fn build(list: Result<Vec<Message>, StoreError>, insert_error: Option<StoreError>) -> Arc<Self> {
        Arc::new(Self {
            list,
            insert_error,
            list_calls: Mutex::new(Vec::new()),
            inserted: Mutex::new(Vec::new()),
        })
    }

    /// A cache holding the given messages
    pub fn with_messages(messages: Vec<Message>) -> Arc<Self> {
        Self::build(Ok(messages), None)
    }

    /// An empty cache
    pub fn empty() -> Arc<Self> {
        Self::build(Ok(Vec::new()), None)
    }

    /// A cache where every operation fails
    pub fn failing() -> Arc<Self> {
        let err = StoreError::Unavailable("redis down".to_string());
        Self::build(Err(err.clone()), Some(err))
    }

    /// A cache that lists fine but rejects writes
    pub fn failing_writes() -> Arc<Self> {
        let err = StoreError::Unavailable("redis down".to_string());
        Self::build(Ok(Vec::new()), Some(err))
    }
}

#[async_trait]
impl MessageCache for StubMessageCache {
    async fn list_messages(&self, limit: i64) -> StoreResult<Vec<Message>> {
        self.list_calls.lock().push(limit);
        self.list.clone()
    }

    async fn insert_message(&self, message: &Message) -> StoreResult<()> {
        if let Some(err) = &self.insert_error {
            return Err(err.clone());
        }
        self.inserted.lock().push(message.clone());
        Ok(())
    }
}

// ============================================================================
// Wire-format bodies
// ============================================================================

/// Message as it appears on the wire
#[derive(Debug, Deserialize)]
pub struct MessageBody {
    pub id: String,
    pub text: String,
    pub user_id: String,
    pub created_at: String,
}

/// List response body
#[derive(Debug, Deserialize)]
pub struct ListMessagesBody {
    pub messages: Vec<MessageBody>,
}

/// Error envelope body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Health response body
#[derive(Debug, Deserialize)]
pub struct HealthBody {
    pub status: String,
}

/// Readiness response body
#[derive(Debug, Deserialize)]
pub struct ReadinessBody {
    pub status: String,
    pub checks: ChecksBody,
}

/// Per-dependency readiness labels
#[derive(Debug, Deserialize)]
pub struct ChecksBody {
    pub database: String,
    pub redis: String,
}
