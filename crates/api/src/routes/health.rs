use axum::routing::get;
use axum::Router;

use crate::handlers::{docs, health};
use crate::state::AppState;

/// Public probes and the OpenAPI document, mounted at the root.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/docs.json", get(docs::openapi_json))
}
