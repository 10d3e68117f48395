use axum::routing::get;
use axum::Router;

use crate::handlers::hunde;
use crate::state::AppState;

/// Routes mounted at `/api/hunde`.
///
/// ```text
/// GET, POST          /
/// GET, PUT, DELETE   /{id}
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(hunde::list).post(hunde::create))
        .route("/{id}", get(hunde::get).put(hunde::update).delete(hunde::delete))
}
