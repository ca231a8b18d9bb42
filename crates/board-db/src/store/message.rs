//! PostgreSQL implementation of MessageStore

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use board_core::entities::{Message, NewMessage, NewReaction, Reaction};
use board_core::traits::{MessageStore, StoreResult};
use board_core::StoreError;

use crate::models::MessageModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MessageStore
#[derive(Clone)]
pub struct PgMessageStore {
    pool: PgPool,
}

impl PgMessageStore {
    /// Create a new PgMessageStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageStore for PgMessageStore {
    #[instrument(skip(self))]
    async fn list_messages(&self, offset: i64, limit: i64) -> StoreResult<Vec<Message>> {
        if limit <= 0 {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, MessageModel>(
            r#"
            SELECT id, message_text, user_id, created_at
            FROM messages
            ORDER BY created_at DESC
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(offset.max(0))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Message::from).collect())
    }

    #[instrument(skip(self, new), fields(user_id = %new.user_id))]
    async fn insert_message(&self, new: NewMessage) -> StoreResult<Message> {
        let result = sqlx::query_as::<_, MessageModel>(
            r#"
            INSERT INTO messages (message_text, user_id)
            VALUES ($1, $2)
            RETURNING id, message_text, user_id, created_at
            "#,
        )
        .bind(&new.text)
        .bind(&new.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Message::from(result))
    }

    // There is no reactions table yet; the honest answer is Unsupported,
    // which the API layer surfaces as 501.
    #[instrument(skip(self, _new))]
    async fn insert_reaction(&self, _new: NewReaction) -> StoreResult<Reaction> {
        Err(StoreError::Unsupported("reaction storage"))
    }
}
