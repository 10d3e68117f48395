//! Handlers for `/api/kurse`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use dogule_core::codes::KURSE;
use dogule_core::types::DbId;
use dogule_db::models::kalender::KalenderEvent;
use dogule_db::models::kurs::{CreateKurs, Kurs, UpdateKurs};

use crate::error::{json_payload, AppResult};
use crate::handlers::{ApiPath, ApiQuery};
use crate::middleware::auth::AuthUser;
use crate::query::{KursListParams, PaginationParams};
use crate::response::{ErrorBody, Page};
use crate::services::kurse;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/kurse",
    tag = "kurse",
    params(KursListParams),
    responses(
        (status = 200, description = "One page of courses", body = Page<Kurs>),
        (status = 401, description = "Unauthorized", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<KursListParams>,
) -> AppResult<Json<Page<Kurs>>> {
    let (filter, window) = params.split();
    Ok(Json(kurse::list(&state.pool, filter, window).await?))
}

#[utoipa::path(
    post,
    path = "/api/kurse",
    tag = "kurse",
    request_body = CreateKurs,
    responses(
        (status = 201, description = "Course created", body = Kurs),
        (status = 400, description = "Invalid payload", body = ErrorBody),
        (status = 401, description = "Unauthorized", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    payload: Result<Json<CreateKurs>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Kurs>)> {
    let input = json_payload(KURSE.invalid_payload, payload)?;
    let row = kurse::create(&state.pool, input).await?;
    tracing::info!(kurs_id = %row.id, user_id = %auth.user_id, "Kurs created");
    Ok((StatusCode::CREATED, Json(row)))
}

#[utoipa::path(
    get,
    path = "/api/kurse/{id}",
    tag = "kurse",
    params(("id" = uuid::Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "The course", body = Kurs),
        (status = 404, description = "Not found", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Kurs>> {
    Ok(Json(kurse::get(&state.pool, id).await?))
}

#[utoipa::path(
    put,
    path = "/api/kurse/{id}",
    tag = "kurse",
    params(("id" = uuid::Uuid, Path, description = "Course id")),
    request_body = UpdateKurs,
    responses(
        (status = 200, description = "Course updated", body = Kurs),
        (status = 400, description = "Invalid payload", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    payload: Result<Json<UpdateKurs>, JsonRejection>,
) -> AppResult<Json<Kurs>> {
    let input = json_payload(KURSE.invalid_payload, payload)?;
    let row = kurse::update(&state.pool, id, input).await?;
    tracing::info!(kurs_id = %id, user_id = %auth.user_id, "Kurs updated");
    Ok(Json(row))
}

#[utoipa::path(
    delete,
    path = "/api/kurse/{id}",
    tag = "kurse",
    params(("id" = uuid::Uuid, Path, description = "Course id")),
    responses(
        (status = 204, description = "Course deleted; its events keep running unlinked"),
        (status = 404, description = "Not found", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    kurse::delete(&state.pool, id).await?;
    tracing::info!(kurs_id = %id, user_id = %auth.user_id, "Kurs deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/kurse/{id}/termine
#[utoipa::path(
    get,
    path = "/api/kurse/{id}/termine",
    tag = "kurse",
    params(("id" = uuid::Uuid, Path, description = "Course id"), PaginationParams),
    responses(
        (status = 200, description = "Calendar events of the course", body = Page<KalenderEvent>),
        (status = 404, description = "Course not found", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn termine(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> AppResult<Json<Page<KalenderEvent>>> {
    Ok(Json(kurse::termine(&state.pool, id, params.window()).await?))
}
