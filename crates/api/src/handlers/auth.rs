//! Handlers for the `/auth` resource (register, login, refresh, me, logout).

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use dogule_core::codes;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::cookie::{clear_refresh_cookie, read_cookie, refresh_cookie, REFRESH_COOKIE};
use crate::auth::jwt::JwtConfig;
use crate::auth::service::{self, AuthSession, LoginRequest, PublicUser, RegisterRequest};
use crate::error::{json_payload, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::ErrorBody;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Body of a successful register, login or refresh. The refresh token is
/// only ever sent as the `dogule_refresh` cookie.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: PublicUser,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MeResponse {
    pub user: PublicUser,
}

/// [`AuthResponse`] plus the `Set-Cookie` header carrying the refresh token.
pub struct SessionResponse {
    status: StatusCode,
    cookie: String,
    body: AuthResponse,
}

impl SessionResponse {
    fn new(status: StatusCode, session: AuthSession, jwt: &JwtConfig) -> Self {
        Self {
            status,
            cookie: refresh_cookie(&session.refresh_token, jwt.refresh_token_expiry_secs()),
            body: AuthResponse {
                access_token: session.access_token,
                expires_in: session.expires_in,
                user: session.user,
            },
        }
    }
}

impl IntoResponse for SessionResponse {
    fn into_response(self) -> Response {
        (self.status, [(SET_COOKIE, self.cookie)], Json(self.body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /auth/register
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created and signed in", body = AuthResponse),
        (status = 400, description = "Invalid payload or weak password", body = ErrorBody),
        (status = 409, description = "Email already registered", body = ErrorBody),
        (status = 429, description = "Rate limited", body = ErrorBody),
    )
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AppResult<SessionResponse> {
    let input = json_payload(codes::AUTH_INVALID_PAYLOAD, payload)?;
    let session = service::register(&state.pool, &state.config.jwt, input).await?;
    Ok(SessionResponse::new(
        StatusCode::CREATED,
        session,
        &state.config.jwt,
    ))
}

/// POST /auth/login
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = AuthResponse),
        (status = 400, description = "Invalid payload", body = ErrorBody),
        (status = 401, description = "Unknown email or wrong password", body = ErrorBody),
        (status = 429, description = "Rate limited", body = ErrorBody),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<SessionResponse> {
    let input = json_payload(codes::AUTH_INVALID_PAYLOAD, payload)?;
    let session = service::login(&state.pool, &state.config.jwt, input).await?;
    Ok(SessionResponse::new(StatusCode::OK, session, &state.config.jwt))
}

/// POST /auth/refresh
///
/// Rotates the refresh token read from the `dogule_refresh` cookie.
#[utoipa::path(
    post,
    path = "/auth/refresh",
    tag = "auth",
    responses(
        (status = 200, description = "New token pair issued", body = AuthResponse),
        (status = 401, description = "Refresh cookie missing, unknown, revoked or expired", body = ErrorBody),
        (status = 429, description = "Rate limited", body = ErrorBody),
    )
)]
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<SessionResponse> {
    let token = read_cookie(&headers, REFRESH_COOKIE);
    let session = service::refresh(&state.pool, &state.config.jwt, token.as_deref()).await?;
    Ok(SessionResponse::new(StatusCode::OK, session, &state.config.jwt))
}

/// GET /auth/me
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    responses(
        (status = 200, description = "The signed-in user", body = MeResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> AppResult<Json<MeResponse>> {
    let user = service::current_user(&state.pool, auth.user_id).await?;
    Ok(Json(MeResponse { user }))
}

/// POST /auth/logout
///
/// Revokes every live refresh token of the caller and clears the cookie.
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "auth",
    responses(
        (status = 204, description = "Signed out"),
        (status = 401, description = "Missing or invalid access token", body = ErrorBody),
    ),
    security(("bearer_auth" = []))
)]
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> AppResult<Response> {
    service::logout(&state.pool, auth.user_id).await?;
    Ok((StatusCode::NO_CONTENT, [(SET_COOKIE, clear_refresh_cookie())]).into_response())
}
