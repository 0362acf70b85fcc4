//! Health check handlers.

use axum::Json;
use axum::extract::State;

use bistro_core::error::AppError;

use crate::dto::response::{HealthResponse, ReadinessResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/health/ready
pub async fn ready(State(state): State<AppState>) -> ApiResult<Json<ReadinessResponse>> {
    state.db.health_check().await.map_err(|e| {
        tracing::warn!(error = %e, "Readiness check failed");
        AppError::service_unavailable("Database is unreachable")
    })?;
    Ok(Json(ReadinessResponse {
        status: "ok".to_string(),
        database: "connected".to_string(),
    }))
}
