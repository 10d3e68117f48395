//! Route definitions for the `/auth` resource.

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::middleware::rate_limit::rate_limit;
use crate::state::AppState;

/// Routes mounted at `/auth`, all rate limited per client.
///
/// ```text
/// POST /register -> register
/// POST /login    -> login
/// POST /refresh  -> refresh (dogule_refresh cookie)
/// GET  /me       -> me (requires auth)
/// POST /logout   -> logout (requires auth)
/// ```
pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/me", get(auth::me))
        .route("/logout", post(auth::logout))
        .route_layer(from_fn_with_state(state, rate_limit))
}
