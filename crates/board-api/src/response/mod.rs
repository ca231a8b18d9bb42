//! Response types and error handling for API endpoints
//!
//! Every error becomes a `{"error": "<message>"}` envelope with a short,
//! stable message. The underlying cause stays in the server-side logs and
//! never reaches the client.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use board_service::ServiceError;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};
use validator::ValidationErrors;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body could not be decoded
    #[error("Could not decode request body")]
    Decode(#[source] JsonRejection),

    /// Request body failed field validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// Listing messages failed in either collaborator
    #[error("Could not list messages")]
    ListMessages(#[source] ServiceError),

    /// Durable insert of a message failed
    #[error("Could not insert message")]
    InsertMessage(#[source] ServiceError),

    /// Durable insert of a reaction failed
    #[error("Could not insert reaction")]
    InsertReaction(#[source] ServiceError),

    /// The feature is absent, not broken
    #[error("{0}")]
    NotImplemented(String),

    /// Anything else
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Decode(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::ListMessages(_) | Self::InsertMessage(_) | Self::InsertReaction(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        // The client gets the stable message; the cause stays here.
        if status.is_server_error() {
            error!(status = %status, error = ?self, "Request failed");
        } else {
            warn!(status = %status, error = ?self, "Request rejected");
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}
