//! Application state
//!
//! Holds the shared state for the Axum application: the message service and
//! handles to its two collaborators. State is built either from real
//! Postgres/Redis backends (see `server`) or from any trait objects, which
//! is how tests inject stubs.

use std::sync::Arc;

use board_core::traits::{MessageCache, MessageStore};
use board_service::MessageService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    messages: MessageService,
    store: Arc<dyn MessageStore>,
    cache: Arc<dyn MessageCache>,
}

impl AppState {
    /// Create a new AppState from the two storage collaborators
    pub fn new(store: Arc<dyn MessageStore>, cache: Arc<dyn MessageCache>) -> Self {
        Self {
            messages: MessageService::new(store.clone(), cache.clone()),
            store,
            cache,
        }
    }

    /// Get the message service
    pub fn messages(&self) -> &MessageService {
        &self.messages
    }

    /// Get the durable store handle (used by readiness checks)
    pub fn store(&self) -> &Arc<dyn MessageStore> {
        &self.store
    }

    /// Get the cache handle (used by readiness checks)
    pub fn cache(&self) -> &Arc<dyn MessageCache> {
        &self.cache
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
