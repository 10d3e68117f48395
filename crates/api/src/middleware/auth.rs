//! Bearer-token authentication: the [`require_auth`] gate and the
//! [`AuthUser`] extractor.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use dogule_core::codes;
use dogule_core::error::CoreError;
use dogule_core::types::DbId;

use crate::auth::jwt::{validate_token, JwtConfig};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's id (from `claims.sub`).
    pub user_id: DbId,
    pub email: String,
}

/// Validate the bearer token in `headers`.
pub fn authenticate(headers: &HeaderMap, jwt: &JwtConfig) -> Result<AuthUser, CoreError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(CoreError::Unauthorized(codes::AUTH_MISSING_TOKEN))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(CoreError::Unauthorized(codes::AUTH_MISSING_TOKEN))?;

    let claims = validate_token(token, jwt).map_err(|e| {
        tracing::debug!(error = %e, "Rejected access token");
        CoreError::Unauthorized(codes::AUTH_INVALID_TOKEN)
    })?;

    Ok(AuthUser {
        user_id: claims.sub,
        email: claims.email,
    })
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Already validated by `require_auth` on gated routes.
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }
        Ok(authenticate(&parts.headers, &state.config.jwt)?)
    }
}

/// Middleware that rejects requests without a valid access token and stores
/// the [`AuthUser`] in the request extensions for downstream handlers and
/// GraphQL resolvers.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = authenticate(request.headers(), &state.config.jwt)?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::http::HeaderValue;
    use uuid::Uuid;

    use super::*;
    use crate::auth::jwt::generate_access_token;

    fn jwt() -> JwtConfig {
        JwtConfig {
            secret: "middleware-test-secret".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        }
    }

    #[test]
    fn missing_header_is_missing_token() {
        assert_matches!(
            authenticate(&HeaderMap::new(), &jwt()),
            Err(CoreError::Unauthorized("ERR_AUTH_MISSING_TOKEN"))
        );
    }

    #[test]
    fn non_bearer_scheme_is_missing_token() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic Zm9vOmJhcg=="));
        assert_matches!(
            authenticate(&headers, &jwt()),
            Err(CoreError::Unauthorized("ERR_AUTH_MISSING_TOKEN"))
        );
    }

    #[test]
    fn garbage_token_is_invalid_token() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer not-a-jwt"));
        assert_matches!(
            authenticate(&headers, &jwt()),
            Err(CoreError::Unauthorized("ERR_AUTH_INVALID_TOKEN"))
        );
    }

    #[test]
    fn valid_token_yields_user() {
        let user_id = Uuid::new_v4();
        let token = generate_access_token(user_id, "anna@example.ch", &jwt()).unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        let user = authenticate(&headers, &jwt()).unwrap();
        assert_eq!(user.user_id, user_id);
        assert_eq!(user.email, "anna@example.ch");
    }
}
