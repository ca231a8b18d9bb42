//! Reaction handlers

use axum::{
    extract::{Path, State},
    Json,
};
use board_service::dto::{CreateReactionRequest, ReactionResponse};
use board_service::ServiceError;

use crate::extractors::ValidatedJson;
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Add a reaction to a message
///
/// POST /messages/{message_id}/reactions
///
/// The body is decoded and validated first; while the durable store lacks
/// reaction storage the outcome is 501 naming the message id. A store that
/// supports reactions returns 201 with the stored reaction.
pub async fn create_reaction(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateReactionRequest>,
) -> ApiResult<Created<Json<ReactionResponse>>> {
    match state.messages().create_reaction(&message_id, request).await {
        Ok(reaction) => Ok(Created(Json(ReactionResponse::from(reaction)))),
        Err(err @ ServiceError::ReactionUnsupported { .. }) => {
            Err(ApiError::NotImplemented(err.to_string()))
        }
        Err(err) => Err(ApiError::InsertReaction(err)),
    }
}
