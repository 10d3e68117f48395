//! Handlers for `/api/kunden`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use dogule_core::codes::KUNDEN;
use dogule_core::types::DbId;
use dogule_db::models::hund::Hund;
use dogule_db::models::kommunikation::Nachricht;
use dogule_db::models::kunde::{CreateKunde, Kunde, UpdateKunde};

use crate::error::{json_payload, AppResult};
use crate::handlers::{ApiPath, ApiQuery};
use crate::middleware::auth::AuthUser;
use crate::query::{KundeListParams, PaginationParams};
use crate::response::{ErrorBody, Page};
use crate::services::kunden;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/kunden",
    tag = "kunden",
    params(KundeListParams),
    responses(
        (status = 200, description = "One page of customers", body = Page<Kunde>),
        (status = 401, description = "Unauthorized", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<KundeListParams>,
) -> AppResult<Json<Page<Kunde>>> {
    let (filter, window) = params.split();
    Ok(Json(kunden::list(&state.pool, filter, window).await?))
}

#[utoipa::path(
    post,
    path = "/api/kunden",
    tag = "kunden",
    request_body = CreateKunde,
    responses(
        (status = 201, description = "Customer created", body = Kunde),
        (status = 400, description = "Invalid payload", body = ErrorBody),
        (status = 401, description = "Unauthorized", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    payload: Result<Json<CreateKunde>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Kunde>)> {
    let input = json_payload(KUNDEN.invalid_payload, payload)?;
    let row = kunden::create(&state.pool, input).await?;
    tracing::info!(kunde_id = %row.id, user_id = %auth.user_id, "Kunde created");
    Ok((StatusCode::CREATED, Json(row)))
}

#[utoipa::path(
    get,
    path = "/api/kunden/{id}",
    tag = "kunden",
    params(("id" = uuid::Uuid, Path, description = "Customer id")),
    responses(
        (status = 200, description = "The customer", body = Kunde),
        (status = 404, description = "Not found", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Kunde>> {
    Ok(Json(kunden::get(&state.pool, id).await?))
}

#[utoipa::path(
    put,
    path = "/api/kunden/{id}",
    tag = "kunden",
    params(("id" = uuid::Uuid, Path, description = "Customer id")),
    request_body = UpdateKunde,
    responses(
        (status = 200, description = "Customer updated", body = Kunde),
        (status = 400, description = "Invalid payload", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    payload: Result<Json<UpdateKunde>, JsonRejection>,
) -> AppResult<Json<Kunde>> {
    let input = json_payload(KUNDEN.invalid_payload, payload)?;
    let row = kunden::update(&state.pool, id, input).await?;
    tracing::info!(kunde_id = %id, user_id = %auth.user_id, "Kunde updated");
    Ok(Json(row))
}

#[utoipa::path(
    delete,
    path = "/api/kunden/{id}",
    tag = "kunden",
    params(("id" = uuid::Uuid, Path, description = "Customer id")),
    responses(
        (status = 204, description = "Customer and their dogs deleted"),
        (status = 404, description = "Not found", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    kunden::delete(&state.pool, id).await?;
    tracing::info!(kunde_id = %id, user_id = %auth.user_id, "Kunde deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/kunden/{id}/hunde
#[utoipa::path(
    get,
    path = "/api/kunden/{id}/hunde",
    tag = "kunden",
    params(("id" = uuid::Uuid, Path, description = "Customer id"), PaginationParams),
    responses(
        (status = 200, description = "Dogs owned by the customer", body = Page<Hund>),
        (status = 404, description = "Customer not found", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn hunde(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> AppResult<Json<Page<Hund>>> {
    Ok(Json(kunden::hunde(&state.pool, id, params.window()).await?))
}

/// GET /api/kunden/{id}/kommunikation
#[utoipa::path(
    get,
    path = "/api/kunden/{id}/kommunikation",
    tag = "kunden",
    params(("id" = uuid::Uuid, Path, description = "Customer id"), PaginationParams),
    responses(
        (status = 200, description = "Messages exchanged with the customer", body = Page<Nachricht>),
        (status = 404, description = "Customer not found", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn kommunikation(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> AppResult<Json<Page<Nachricht>>> {
    Ok(Json(
        kunden::kommunikation(&state.pool, id, params.window()).await?,
    ))
}
