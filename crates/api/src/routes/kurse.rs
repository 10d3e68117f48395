use axum::routing::get;
use axum::Router;

use crate::handlers::kurse;
use crate::state::AppState;

/// Routes mounted at `/api/kurse`.
///
/// ```text
/// GET, POST          /
/// GET, PUT, DELETE   /{id}
/// GET                /{id}/termine
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(kurse::list).post(kurse::create))
        .route("/{id}", get(kurse::get).put(kurse::update).delete(kurse::delete))
        .route("/{id}/termine", get(kurse::termine))
}
