//! Liveness and readiness probes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use dogule_core::codes;
use serde::Serialize;
use utoipa::ToSchema;

use crate::response::ErrorBody;
use crate::state::AppState;

/// Health check response payload.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub db_healthy: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReadyResponse {
    pub status: &'static str,
}

/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service and database health", body = HealthResponse))
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = dogule_db::health_check(&state.pool).await.is_ok();
    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// GET /ready
///
/// Runs `SELECT 1` through the adapter, bootstrapping the schema if needed.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Database reachable and schema bootstrapped", body = ReadyResponse),
        (status = 503, description = "Database unavailable", body = ErrorBody),
    )
)]
pub async fn ready(
    State(state): State<AppState>,
) -> Result<Json<ReadyResponse>, (StatusCode, Json<ErrorBody>)> {
    match state.db.query("SELECT 1", &[]).await {
        Ok(_) => Ok(Json(ReadyResponse { status: "ready" })),
        Err(err) => {
            tracing::warn!(error = %err, "Readiness check failed");
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorBody {
                    message: codes::NOT_READY.to_string(),
                    details: None,
                }),
            ))
        }
    }
}
