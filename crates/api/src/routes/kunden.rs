use axum::routing::get;
use axum::Router;

use crate::handlers::kunden;
use crate::state::AppState;

/// Routes mounted at `/api/kunden`.
///
/// ```text
/// GET, POST          /
/// GET, PUT, DELETE   /{id}
/// GET                /{id}/hunde
/// GET                /{id}/kommunikation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(kunden::list).post(kunden::create))
        .route(
            "/{id}",
            get(kunden::get).put(kunden::update).delete(kunden::delete),
        )
        .route("/{id}/hunde", get(kunden::hunde))
        .route("/{id}/kommunikation", get(kunden::kommunikation))
}
