use axum::routing::get;
use axum::Router;

use crate::handlers::kommunikation;
use crate::state::AppState;

/// Routes mounted at `/api/kommunikation`.
///
/// ```text
/// GET, POST          /
/// GET, PUT, DELETE   /{id}
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(kommunikation::list).post(kommunikation::create))
        .route("/{id}", get(kommunikation::get).put(kommunikation::update).delete(kommunikation::delete))
}
