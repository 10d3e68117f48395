//! Handlers for `/api/finanzen`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use dogule_core::codes::FINANZEN;
use dogule_core::types::DbId;
use dogule_db::models::finanz::{CreateFinanz, Finanz, FinanzSummary, UpdateFinanz};

use crate::error::{json_payload, AppResult};
use crate::handlers::{ApiPath, ApiQuery};
use crate::middleware::auth::AuthUser;
use crate::query::{DateRangeParams, FinanzListParams};
use crate::response::{ErrorBody, Page};
use crate::services::finanzen;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/finanzen",
    tag = "finanzen",
    params(FinanzListParams),
    responses(
        (status = 200, description = "One page of ledger entries", body = Page<Finanz>),
        (status = 401, description = "Unauthorized", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<FinanzListParams>,
) -> AppResult<Json<Page<Finanz>>> {
    let (filter, window) = params.split();
    Ok(Json(finanzen::list(&state.pool, filter, window).await?))
}

#[utoipa::path(
    post,
    path = "/api/finanzen",
    tag = "finanzen",
    request_body = CreateFinanz,
    responses(
        (status = 201, description = "Ledger entry created", body = Finanz),
        (status = 400, description = "Invalid payload", body = ErrorBody),
        (status = 401, description = "Unauthorized", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    payload: Result<Json<CreateFinanz>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Finanz>)> {
    let input = json_payload(FINANZEN.invalid_payload, payload)?;
    let row = finanzen::create(&state.pool, input).await?;
    tracing::info!(finanz_id = %row.id, user_id = %auth.user_id, "Finanz created");
    Ok((StatusCode::CREATED, Json(row)))
}

#[utoipa::path(
    get,
    path = "/api/finanzen/{id}",
    tag = "finanzen",
    params(("id" = uuid::Uuid, Path, description = "Ledger entry id")),
    responses(
        (status = 200, description = "The ledger entry", body = Finanz),
        (status = 404, description = "Not found", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Finanz>> {
    Ok(Json(finanzen::get(&state.pool, id).await?))
}

#[utoipa::path(
    put,
    path = "/api/finanzen/{id}",
    tag = "finanzen",
    params(("id" = uuid::Uuid, Path, description = "Ledger entry id")),
    request_body = UpdateFinanz,
    responses(
        (status = 200, description = "Ledger entry updated", body = Finanz),
        (status = 400, description = "Invalid payload", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    payload: Result<Json<UpdateFinanz>, JsonRejection>,
) -> AppResult<Json<Finanz>> {
    let input = json_payload(FINANZEN.invalid_payload, payload)?;
    let row = finanzen::update(&state.pool, id, input).await?;
    tracing::info!(finanz_id = %id, user_id = %auth.user_id, "Finanz updated");
    Ok(Json(row))
}

#[utoipa::path(
    delete,
    path = "/api/finanzen/{id}",
    tag = "finanzen",
    params(("id" = uuid::Uuid, Path, description = "Ledger entry id")),
    responses(
        (status = 204, description = "Ledger entry deleted"),
        (status = 404, description = "Not found", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    finanzen::delete(&state.pool, id).await?;
    tracing::info!(finanz_id = %id, user_id = %auth.user_id, "Finanz deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/finanzen/summary
///
/// Income, expenses and balance in cents, optionally within `[from, to]`.
#[utoipa::path(
    get,
    path = "/api/finanzen/summary",
    tag = "finanzen",
    params(DateRangeParams),
    responses(
        (status = 200, description = "Ledger totals", body = FinanzSummary),
        (status = 400, description = "`to` is before `from`", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn summary(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<DateRangeParams>,
) -> AppResult<Json<FinanzSummary>> {
    Ok(Json(
        finanzen::summary(&state.pool, params.from, params.to).await?,
    ))
}
