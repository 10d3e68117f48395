use axum::routing::get;
use axum::Router;

use crate::handlers::finanzen;
use crate::state::AppState;

/// Routes mounted at `/api/finanzen`. `/summary` takes precedence over `/{id}`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(finanzen::list).post(finanzen::create))
        .route("/summary", get(finanzen::summary))
        .route(
            "/{id}",
            get(finanzen::get)
                .put(finanzen::update)
                .delete(finanzen::delete),
        )
}
