//! Health check handlers
//!
//! Endpoints for liveness and readiness probes. Readiness exercises both
//! collaborators through their own contract operations rather than extra
//! ping methods.

use axum::{extract::State, http::StatusCode, Json};
use board_service::dto::{HealthChecks, HealthResponse, ReadinessResponse};

use crate::state::AppState;

fn check_label(healthy: bool) -> String {
    if healthy { "up" } else { "down" }.to_string()
}

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Readiness check with dependency health
///
/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let db_healthy = state.store().list_messages(0, 1).await.is_ok();
    let redis_healthy = state.cache().list_messages(1).await.is_ok();

    let ready = db_healthy && redis_healthy;
    let response = ReadinessResponse {
        status: if ready { "ready" } else { "degraded" }.to_string(),
        checks: HealthChecks {
            database: check_label(db_healthy),
            redis: check_label(redis_healthy),
        },
    };
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
