use axum::routing::get;
use axum::Router;

use crate::handlers::kalender;
use crate::state::AppState;

/// Routes mounted at `/api/kalender`.
///
/// ```text
/// GET, POST          /
/// GET, PUT, DELETE   /{id}
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(kalender::list).post(kalender::create))
        .route("/{id}", get(kalender::get).put(kalender::update).delete(kalender::delete))
}
