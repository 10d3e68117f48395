//! Handlers for `/api/kalender`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use dogule_core::codes::KALENDER;
use dogule_core::types::DbId;
use dogule_db::models::kalender::{CreateKalenderEvent, KalenderEvent, UpdateKalenderEvent};

use crate::error::{json_payload, AppResult};
use crate::handlers::{ApiPath, ApiQuery};
use crate::middleware::auth::AuthUser;
use crate::query::KalenderListParams;
use crate::response::{ErrorBody, Page};
use crate::services::kalender;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/kalender",
    tag = "kalender",
    params(KalenderListParams),
    responses(
        (status = 200, description = "One page of calendar events", body = Page<KalenderEvent>),
        (status = 401, description = "Unauthorized", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<KalenderListParams>,
) -> AppResult<Json<Page<KalenderEvent>>> {
    let (filter, window) = params.split();
    Ok(Json(kalender::list(&state.pool, filter, window).await?))
}

#[utoipa::path(
    post,
    path = "/api/kalender",
    tag = "kalender",
    request_body = CreateKalenderEvent,
    responses(
        (status = 201, description = "Event created", body = KalenderEvent),
        (status = 400, description = "Invalid payload", body = ErrorBody),
        (status = 401, description = "Unauthorized", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    payload: Result<Json<CreateKalenderEvent>, JsonRejection>,
) -> AppResult<(StatusCode, Json<KalenderEvent>)> {
    let input = json_payload(KALENDER.invalid_payload, payload)?;
    let row = kalender::create(&state.pool, input).await?;
    tracing::info!(event_id = %row.id, user_id = %auth.user_id, "Kalender event created");
    Ok((StatusCode::CREATED, Json(row)))
}

#[utoipa::path(
    get,
    path = "/api/kalender/{id}",
    tag = "kalender",
    params(("id" = uuid::Uuid, Path, description = "Event id")),
    responses(
        (status = 200, description = "The event", body = KalenderEvent),
        (status = 404, description = "Not found", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<KalenderEvent>> {
    Ok(Json(kalender::get(&state.pool, id).await?))
}

#[utoipa::path(
    put,
    path = "/api/kalender/{id}",
    tag = "kalender",
    params(("id" = uuid::Uuid, Path, description = "Event id")),
    request_body = UpdateKalenderEvent,
    responses(
        (status = 200, description = "Event updated", body = KalenderEvent),
        (status = 400, description = "Invalid payload", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    payload: Result<Json<UpdateKalenderEvent>, JsonRejection>,
) -> AppResult<Json<KalenderEvent>> {
    let input = json_payload(KALENDER.invalid_payload, payload)?;
    let row = kalender::update(&state.pool, id, input).await?;
    tracing::info!(event_id = %id, user_id = %auth.user_id, "Kalender event updated");
    Ok(Json(row))
}

#[utoipa::path(
    delete,
    path = "/api/kalender/{id}",
    tag = "kalender",
    params(("id" = uuid::Uuid, Path, description = "Event id")),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 404, description = "Not found", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    kalender::delete(&state.pool, id).await?;
    tracing::info!(event_id = %id, user_id = %auth.user_id, "Kalender event deleted");
    Ok(StatusCode::NO_CONTENT)
}
