//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, messages, reactions};
use crate::state::AppState;

/// Create the main API router with the message-board routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/messages", get(messages::list_messages))
        .route("/messages", post(messages::create_message))
        .route(
            "/messages/:message_id/reactions",
            post(reactions::create_reaction),
        )
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}
