//! Handler for the dashboard tiles.

use axum::extract::State;
use axum::Json;

use crate::response::ErrorBody;
use crate::services::dashboard::{self, DashboardSummary};
use crate::state::AppState;

/// GET /dashboard
///
/// Always answers 200; a metric whose query fails is reported as `0`.
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "dashboard",
    responses(
        (status = 200, description = "Dashboard totals", body = DashboardSummary),
        (status = 401, description = "Unauthorized", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn summary(State(state): State<AppState>) -> Json<DashboardSummary> {
    Json(dashboard::summary(&state.pool).await)
}
