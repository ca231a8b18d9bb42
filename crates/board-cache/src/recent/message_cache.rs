//! Recent-messages cache backed by a capped Redis list.
//!
//! Writes push onto the head of `messages:recent` and trim the list to the
//! configured capacity, so the list always holds the newest messages first.
//! Reads take a head slice. The cache may hold fewer messages than asked
//! for; that is not an error.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};

use board_core::entities::Message;
use board_core::traits::{MessageCache, StoreResult};
use board_core::StoreError;

use crate::pool::{RedisPool, RedisPoolError};

/// Redis key holding the recent-messages list
const RECENT_MESSAGES_KEY: &str = "messages:recent";

/// Default list capacity; matches the page size served by the API
const DEFAULT_CAPACITY: i64 = 10;

/// Wire format of a cached message list entry
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CachedMessage {
    id: String,
    text: String,
    user_id: String,
    created_at: DateTime<Utc>,
}

impl From<&Message> for CachedMessage {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id.clone(),
            text: message.text.clone(),
            user_id: message.user_id.clone(),
            created_at: message.created_at,
        }
    }
}

impl From<CachedMessage> for Message {
    fn from(cached: CachedMessage) -> Self {
        Message {
            id: cached.id,
            text: cached.text,
            user_id: cached.user_id,
            created_at: cached.created_at,
        }
    }
}

fn to_store_error(e: RedisPoolError) -> StoreError {
    StoreError::Unavailable(e.to_string())
}

/// Redis implementation of MessageCache
#[derive(Clone)]
pub struct RedisMessageCache {
    pool: RedisPool,
    capacity: i64,
}

impl RedisMessageCache {
    /// Create a new cache with the default capacity
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Create with custom capacity (mainly for tests)
    #[must_use]
    pub fn with_capacity(pool: RedisPool, capacity: i64) -> Self {
        Self { pool, capacity }
    }
}

#[async_trait]
impl MessageCache for RedisMessageCache {
    async fn list_messages(&self, limit: i64) -> StoreResult<Vec<Message>> {
        if limit <= 0 {
            return Ok(Vec::new());
        }

        let mut conn = self.pool.get().await.map_err(to_store_error)?;
        let entries: Vec<String> = conn
            .lrange(RECENT_MESSAGES_KEY, 0, (limit - 1) as isize)
            .await
            .map_err(|e| to_store_error(RedisPoolError::Redis(e)))?;

        entries
            .iter()
            .map(|entry| {
                serde_json::from_str::<CachedMessage>(entry)
                    .map(Message::from)
                    .map_err(|e| StoreError::Unavailable(format!("corrupt cache entry: {e}")))
            })
            .collect()
    }

    async fn insert_message(&self, message: &Message) -> StoreResult<()> {
        let payload = serde_json::to_string(&CachedMessage::from(message))
            .map_err(|e| to_store_error(RedisPoolError::Serialization(e)))?;

        let mut conn = self.pool.get().await.map_err(to_store_error)?;
        conn.lpush::<_, _, ()>(RECENT_MESSAGES_KEY, payload)
            .await
            .map_err(|e| to_store_error(RedisPoolError::Redis(e)))?;
        conn.ltrim::<_, ()>(RECENT_MESSAGES_KEY, 0, (self.capacity - 1) as isize)
            .await
            .map_err(|e| to_store_error(RedisPoolError::Redis(e)))?;

        tracing::debug!(
            message_id = %message.id,
            capacity = self.capacity,
            "Cached message"
        );

        Ok(())
    }
}
