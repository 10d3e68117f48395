//! Handlers for `/api/kommunikation`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use dogule_core::codes::KOMMUNIKATION;
use dogule_core::types::DbId;
use dogule_db::models::kommunikation::{CreateNachricht, Nachricht, UpdateNachricht};

use crate::error::{json_payload, AppResult};
use crate::handlers::{ApiPath, ApiQuery};
use crate::middleware::auth::AuthUser;
use crate::query::NachrichtListParams;
use crate::response::{ErrorBody, Page};
use crate::services::kommunikation;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/kommunikation",
    tag = "kommunikation",
    params(NachrichtListParams),
    responses(
        (status = 200, description = "One page of messages", body = Page<Nachricht>),
        (status = 401, description = "Unauthorized", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<NachrichtListParams>,
) -> AppResult<Json<Page<Nachricht>>> {
    let (filter, window) = params.split();
    Ok(Json(kommunikation::list(&state.pool, filter, window).await?))
}

#[utoipa::path(
    post,
    path = "/api/kommunikation",
    tag = "kommunikation",
    request_body = CreateNachricht,
    responses(
        (status = 201, description = "Message created", body = Nachricht),
        (status = 400, description = "Invalid payload", body = ErrorBody),
        (status = 401, description = "Unauthorized", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    payload: Result<Json<CreateNachricht>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Nachricht>)> {
    let input = json_payload(KOMMUNIKATION.invalid_payload, payload)?;
    let row = kommunikation::create(&state.pool, input).await?;
    tracing::info!(nachricht_id = %row.id, user_id = %auth.user_id, "Nachricht created");
    Ok((StatusCode::CREATED, Json(row)))
}

#[utoipa::path(
    get,
    path = "/api/kommunikation/{id}",
    tag = "kommunikation",
    params(("id" = uuid::Uuid, Path, description = "Message id")),
    responses(
        (status = 200, description = "The message", body = Nachricht),
        (status = 404, description = "Not found", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Nachricht>> {
    Ok(Json(kommunikation::get(&state.pool, id).await?))
}

#[utoipa::path(
    put,
    path = "/api/kommunikation/{id}",
    tag = "kommunikation",
    params(("id" = uuid::Uuid, Path, description = "Message id")),
    request_body = UpdateNachricht,
    responses(
        (status = 200, description = "Message updated", body = Nachricht),
        (status = 400, description = "Invalid payload", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    payload: Result<Json<UpdateNachricht>, JsonRejection>,
) -> AppResult<Json<Nachricht>> {
    let input = json_payload(KOMMUNIKATION.invalid_payload, payload)?;
    let row = kommunikation::update(&state.pool, id, input).await?;
    tracing::info!(nachricht_id = %id, user_id = %auth.user_id, "Nachricht updated");
    Ok(Json(row))
}

#[utoipa::path(
    delete,
    path = "/api/kommunikation/{id}",
    tag = "kommunikation",
    params(("id" = uuid::Uuid, Path, description = "Message id")),
    responses(
        (status = 204, description = "Message deleted"),
        (status = 404, description = "Not found", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    kommunikation::delete(&state.pool, id).await?;
    tracing::info!(nachricht_id = %id, user_id = %auth.user_id, "Nachricht deleted");
    Ok(StatusCode::NO_CONTENT)
}
