//! Message service
//!
//! Orchestrates reads and writes across the two storage collaborators: the
//! durable store (source of truth) and the recent-messages cache.
//!
//! Listing consults the cache first and tops the page up from the durable
//! store. The offset arithmetic assumes the cache holds a contiguous
//! newest-first prefix of the durable order; if that assumption is violated
//! the page can contain duplicates or gaps, and no de-duplication is
//! attempted here.
//!
//! Writes go to the durable store first. The cache mirror afterwards is
//! best-effort: its failure is logged and never surfaced.

use std::sync::Arc;

use tracing::{error, info, instrument};

use board_core::entities::{Message, NewMessage, NewReaction, Reaction};
use board_core::traits::{MessageCache, MessageStore};

use crate::dto::{CreateMessageRequest, CreateReactionRequest};

use super::error::{ServiceError, ServiceResult};

/// Compute the durable-store window still needed after the cache returned
/// `cached` messages for a page of `page_size`.
///
/// Returns `None` when the cache already filled the page. Otherwise the
/// durable store is queried at `offset = cached` for the remaining count.
pub fn remaining_window(cached: usize, page_size: i64) -> Option<(i64, i64)> {
    let cached = cached as i64;
    if cached >= page_size {
        return None;
    }
    Some((cached, page_size - cached))
}

/// Message service orchestrating the durable store and the cache
#[derive(Clone)]
pub struct MessageService {
    store: Arc<dyn MessageStore>,
    cache: Arc<dyn MessageCache>,
}

impl MessageService {
    /// Create a new MessageService
    pub fn new(store: Arc<dyn MessageStore>, cache: Arc<dyn MessageCache>) -> Self {
        Self { store, cache }
    }

    /// List one page of messages, newest first.
    ///
    /// The cache is read first; the remainder comes from the durable store.
    /// A failure of either read fails the whole operation, so a page is
    /// either complete or absent.
    #[instrument(skip(self))]
    pub async fn list_page(&self, page_size: i64) -> ServiceResult<Vec<Message>> {
        let mut page = self.cache.list_messages(page_size).await?;

        let Some((offset, limit)) = remaining_window(page.len(), page_size) else {
            return Ok(page);
        };

        let from_store = self.store.list_messages(offset, limit).await?;
        page.extend(from_store);

        Ok(page)
    }

    /// Create a message.
    ///
    /// The durable store is authoritative: it assigns the id and timestamp,
    /// and its failure fails the operation. The cache mirror afterwards is
    /// best-effort.
    #[instrument(skip(self, request), fields(user_id = %request.user_id))]
    pub async fn create_message(&self, request: CreateMessageRequest) -> ServiceResult<Message> {
        let new = NewMessage::new(request.text, request.user_id);
        let stored = self.store.insert_message(new).await?;

        info!(message_id = %stored.id, "Message created");

        self.mirror_to_cache(&stored).await;

        Ok(stored)
    }

    /// Create a reaction on a message.
    ///
    /// Routed through the durable store; a backend without reaction storage
    /// reports unsupported, which becomes the distinct not-implemented
    /// outcome rather than a storage failure.
    #[instrument(skip(self, request), fields(message_id = %message_id))]
    pub async fn create_reaction(
        &self,
        message_id: &str,
        request: CreateReactionRequest,
    ) -> ServiceResult<Reaction> {
        let new = NewReaction::new(
            message_id.to_string(),
            request.kind,
            request.score,
            request.user_id,
        );

        match self.store.insert_reaction(new).await {
            Ok(reaction) => {
                info!(reaction_id = %reaction.id, "Reaction created");
                Ok(reaction)
            }
            Err(err) if err.is_unsupported() => {
                Err(ServiceError::reaction_unsupported(message_id))
            }
            Err(err) => Err(ServiceError::Store(err)),
        }
    }

    /// Mirror a just-persisted message into the cache.
    ///
    /// This is the one place a collaborator failure is swallowed: the cache
    /// is an optimization, and a cold cache self-heals on the next read.
    async fn mirror_to_cache(&self, message: &Message) {
        if let Err(err) = self.cache.insert_message(message).await {
            error!(
                error = %err,
                message_id = %message.id,
                "Could not cache message"
            );
        }
    }
}
