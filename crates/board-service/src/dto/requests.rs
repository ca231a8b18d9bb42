//! Request DTOs for API endpoints

use serde::Deserialize;
use validator::Validate;

/// Create message request
///
/// Deliberately permissive: absent fields default to empty strings, unknown
/// fields are ignored. The only hard failure is a body that is not JSON.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMessageRequest {
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub user_id: String,
}

/// Create reaction request
///
/// `score` defaults to 1 when unspecified and must be positive; that is the
/// only field validation this API enforces.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReactionRequest {
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default = "default_score")]
    #[validate(range(min = 1, message = "Score must be a positive integer"))]
    pub score: i64,

    #[serde(default)]
    pub user_id: String,
}

fn default_score() -> i64 {
    1
}
