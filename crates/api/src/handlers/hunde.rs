//! Handlers for `/api/hunde`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use dogule_core::codes::HUNDE;
use dogule_core::types::DbId;
use dogule_db::models::hund::{CreateHund, Hund, UpdateHund};

use crate::error::{json_payload, AppResult};
use crate::handlers::{ApiPath, ApiQuery};
use crate::middleware::auth::AuthUser;
use crate::query::HundListParams;
use crate::response::{ErrorBody, Page};
use crate::services::hunde;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/hunde",
    tag = "hunde",
    params(HundListParams),
    responses(
        (status = 200, description = "One page of dogs", body = Page<Hund>),
        (status = 401, description = "Unauthorized", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<HundListParams>,
) -> AppResult<Json<Page<Hund>>> {
    let (filter, window) = params.split();
    Ok(Json(hunde::list(&state.pool, filter, window).await?))
}

#[utoipa::path(
    post,
    path = "/api/hunde",
    tag = "hunde",
    request_body = CreateHund,
    responses(
        (status = 201, description = "Dog created", body = Hund),
        (status = 400, description = "Invalid payload", body = ErrorBody),
        (status = 401, description = "Unauthorized", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    payload: Result<Json<CreateHund>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Hund>)> {
    let input = json_payload(HUNDE.invalid_payload, payload)?;
    let row = hunde::create(&state.pool, input).await?;
    tracing::info!(hund_id = %row.id, user_id = %auth.user_id, "Hund created");
    Ok((StatusCode::CREATED, Json(row)))
}

#[utoipa::path(
    get,
    path = "/api/hunde/{id}",
    tag = "hunde",
    params(("id" = uuid::Uuid, Path, description = "Dog id")),
    responses(
        (status = 200, description = "The dog", body = Hund),
        (status = 404, description = "Not found", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Hund>> {
    Ok(Json(hunde::get(&state.pool, id).await?))
}

#[utoipa::path(
    put,
    path = "/api/hunde/{id}",
    tag = "hunde",
    params(("id" = uuid::Uuid, Path, description = "Dog id")),
    request_body = UpdateHund,
    responses(
        (status = 200, description = "Dog updated", body = Hund),
        (status = 400, description = "Invalid payload", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    payload: Result<Json<UpdateHund>, JsonRejection>,
) -> AppResult<Json<Hund>> {
    let input = json_payload(HUNDE.invalid_payload, payload)?;
    let row = hunde::update(&state.pool, id, input).await?;
    tracing::info!(hund_id = %id, user_id = %auth.user_id, "Hund updated");
    Ok(Json(row))
}

#[utoipa::path(
    delete,
    path = "/api/hunde/{id}",
    tag = "hunde",
    params(("id" = uuid::Uuid, Path, description = "Dog id")),
    responses(
        (status = 204, description = "Dog deleted"),
        (status = 404, description = "Not found", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    hunde::delete(&state.pool, id).await?;
    tracing::info!(hund_id = %id, user_id = %auth.user_id, "Hund deleted");
    Ok(StatusCode::NO_CONTENT)
}
