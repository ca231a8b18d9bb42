//! Message handlers

use axum::{extract::State, Json};
use board_service::dto::{CreateMessageRequest, ListMessagesResponse, MessageResponse};

use crate::extractors::JsonBody;
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Fixed page size served to clients; no cursor is exposed yet
pub const PAGE_SIZE: i64 = 10;

/// List the most recent messages
///
/// GET /messages
pub async fn list_messages(State(state): State<AppState>) -> ApiResult<Json<ListMessagesResponse>> {
    let messages = state
        .messages()
        .list_page(PAGE_SIZE)
        .await
        .map_err(ApiError::ListMessages)?;
    Ok(Json(ListMessagesResponse::from(messages)))
}

/// Create a message
///
/// POST /messages
pub async fn create_message(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateMessageRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let stored = state
        .messages()
        .create_message(request)
        .await
        .map_err(ApiError::InsertMessage)?;
    Ok(Created(Json(MessageResponse::from(stored))))
}
