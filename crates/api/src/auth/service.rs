//! Registration, login and refresh-token rotation.
//!
//! Every successful authentication revokes all live refresh tokens of the
//! user before issuing a new pair, so at most one token per user is live.
//! Two concurrent refreshes presenting the same token are not serialized;
//! each statement runs independently against the store.

use chrono::Utc;
use dogule_core::codes;
use dogule_core::error::CoreError;
use dogule_core::types::{DbId, Timestamp};
use dogule_db::models::refresh_token::CreateRefreshToken;
use dogule_db::models::user::{CreateUser, User};
use dogule_db::repositories::{RefreshTokenRepo, UserRepo};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use utoipa::ToSchema;
use validator::Validate;

use crate::auth::jwt::{
    generate_access_token, generate_refresh_token, hash_refresh_token, JwtConfig,
};
use crate::auth::password::{
    hash_password_blocking, validate_password_strength, verify_password_blocking,
    MIN_PASSWORD_LENGTH,
};
use crate::error::{database_error, AppError, AppResult};

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    pub password: String,
    #[validate(length(max = 200))]
    pub name: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// User fields safe to return to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    #[schema(value_type = String, format = Uuid)]
    pub id: DbId,
    pub email: String,
    pub name: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            created_at: user.created_at,
        }
    }
}

/// Result of a successful register, login or refresh.
///
/// The refresh token travels in a cookie, never in the JSON body.
#[derive(Debug)]
pub struct AuthSession {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub refresh_token: String,
    pub user: PublicUser,
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Create a user and sign them in.
pub async fn register(
    pool: &PgPool,
    jwt: &JwtConfig,
    input: RegisterRequest,
) -> AppResult<AuthSession> {
    input
        .validate()
        .map_err(|e| CoreError::from_validation(codes::AUTH_INVALID_PAYLOAD, &e))?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH).map_err(|msg| {
        CoreError::Validation {
            code: codes::AUTH_INVALID_PAYLOAD,
            details: Some(serde_json::json!({ "password": msg })),
        }
    })?;

    let email = normalize_email(&input.email);
    let existing = UserRepo::find_by_email(pool, &email)
        .await
        .map_err(database_error(codes::AUTH_REGISTER_001))?;
    if existing.is_some() {
        return Err(CoreError::Conflict(codes::AUTH_EMAIL_TAKEN).into());
    }

    let password_hash = hash_password_blocking(input.password)
        .await
        .map_err(|message| CoreError::Internal {
            code: codes::AUTH_REGISTER_001,
            message,
        })?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            email,
            password_hash,
            name: input.name,
        },
    )
    .await
    .map_err(|err| match &err {
        // Lost a race against a concurrent registration.
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::Core(CoreError::Conflict(codes::AUTH_EMAIL_TAKEN))
        }
        _ => database_error(codes::AUTH_REGISTER_001)(err),
    })?;

    tracing::info!(user_id = %user.id, "User registered");
    issue_session(pool, jwt, &user, codes::AUTH_REGISTER_001).await
}

/// Check credentials and sign the user in.
///
/// Unknown email and wrong password produce the same error.
pub async fn login(pool: &PgPool, jwt: &JwtConfig, input: LoginRequest) -> AppResult<AuthSession> {
    input
        .validate()
        .map_err(|e| CoreError::from_validation(codes::AUTH_INVALID_PAYLOAD, &e))?;

    let user = UserRepo::find_by_email(pool, &normalize_email(&input.email))
        .await
        .map_err(database_error(codes::AUTH_LOGIN_001))?
        .ok_or(CoreError::Unauthorized(codes::AUTH_INVALID_CREDENTIALS))?;

    let valid = verify_password_blocking(input.password, user.password_hash.clone())
        .await
        .map_err(|message| CoreError::Internal {
            code: codes::AUTH_LOGIN_001,
            message,
        })?;
    if !valid {
        tracing::debug!(user_id = %user.id, "Login rejected: wrong password");
        return Err(CoreError::Unauthorized(codes::AUTH_INVALID_CREDENTIALS).into());
    }

    issue_session(pool, jwt, &user, codes::AUTH_LOGIN_001).await
}

/// Exchange a refresh token for a new access/refresh pair.
///
/// | Stored token     | Result                                   |
/// |------------------|------------------------------------------|
/// | absent           | `ERR_AUTH_REFRESH_INVALID`               |
/// | revoked          | `ERR_AUTH_REFRESH_REVOKED`               |
/// | past `expires_at`| revoked, then `ERR_AUTH_REFRESH_EXPIRED` |
/// | live             | rotated                                  |
pub async fn refresh(pool: &PgPool, jwt: &JwtConfig, token: Option<&str>) -> AppResult<AuthSession> {
    let token = token.ok_or(CoreError::Unauthorized(codes::AUTH_REFRESH_MISSING))?;

    let stored = RefreshTokenRepo::find_by_hash(pool, &hash_refresh_token(token))
        .await
        .map_err(database_error(codes::AUTH_REFRESH_001))?
        .ok_or(CoreError::Unauthorized(codes::AUTH_REFRESH_INVALID))?;

    if stored.is_revoked() {
        tracing::debug!(user_id = %stored.user_id, "Refresh rejected: token revoked");
        return Err(CoreError::Unauthorized(codes::AUTH_REFRESH_REVOKED).into());
    }

    if stored.is_expired_at(Utc::now()) {
        RefreshTokenRepo::revoke(pool, stored.id)
            .await
            .map_err(database_error(codes::AUTH_REFRESH_001))?;
        tracing::debug!(user_id = %stored.user_id, "Refresh rejected: token expired");
        return Err(CoreError::Unauthorized(codes::AUTH_REFRESH_EXPIRED).into());
    }

    let user = UserRepo::find_by_id(pool, stored.user_id)
        .await
        .map_err(database_error(codes::AUTH_REFRESH_001))?
        .ok_or(CoreError::Unauthorized(codes::AUTH_USER_NOT_FOUND))?;

    issue_session(pool, jwt, &user, codes::AUTH_REFRESH_001).await
}

/// Load the user behind an access token.
pub async fn current_user(pool: &PgPool, user_id: DbId) -> AppResult<PublicUser> {
    let user = UserRepo::find_by_id(pool, user_id)
        .await
        .map_err(database_error(codes::AUTH_TOKEN_001))?
        .ok_or(CoreError::Unauthorized(codes::AUTH_USER_NOT_FOUND))?;
    Ok(PublicUser::from(&user))
}

/// Revoke every live refresh token of the user. Returns how many were revoked.
pub async fn logout(pool: &PgPool, user_id: DbId) -> AppResult<u64> {
    let revoked = RefreshTokenRepo::revoke_all_for_user(pool, user_id)
        .await
        .map_err(database_error(codes::AUTH_TOKEN_001))?;
    tracing::info!(user_id = %user_id, revoked, "User logged out");
    Ok(revoked)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Revoke the user's live tokens, then issue and persist a new pair.
async fn issue_session(
    pool: &PgPool,
    jwt: &JwtConfig,
    user: &User,
    code: &'static str,
) -> AppResult<AuthSession> {
    RefreshTokenRepo::revoke_all_for_user(pool, user.id)
        .await
        .map_err(database_error(code))?;

    let access_token =
        generate_access_token(user.id, &user.email, jwt).map_err(|e| CoreError::Internal {
            code: codes::AUTH_TOKEN_001,
            message: format!("Token generation error: {e}"),
        })?;

    let (refresh_token, token_hash) = generate_refresh_token();
    RefreshTokenRepo::create(
        pool,
        &CreateRefreshToken {
            user_id: user.id,
            token_hash,
            expires_at: Utc::now() + chrono::Duration::days(jwt.refresh_token_expiry_days),
        },
    )
    .await
    .map_err(database_error(code))?;

    Ok(AuthSession {
        access_token,
        expires_in: jwt.access_token_expiry_secs(),
        refresh_token,
        user: PublicUser::from(user),
    })
}

#[cfg(test)]
mod tests {
    use super::normalize_email;

    #[test]
    fn emails_are_trimmed_and_lowercased() {
        assert_eq!(normalize_email("  Anna@Example.CH "), "anna@example.ch");
    }
}
