use async_graphql_axum::GraphQL;
use axum::middleware::from_fn_with_state;
use axum::routing::post_service;
use axum::Router;

use crate::graphql::build_schema;
use crate::middleware::auth::require_auth;
use crate::middleware::rate_limit::rate_limit;
use crate::state::AppState;

/// `POST /graphql`: rate limited first, then gated on a bearer token.
pub fn router(state: AppState) -> Router<AppState> {
    let schema = build_schema(state.pool.clone());
    Router::new()
        .route("/graphql", post_service(GraphQL::new(schema)))
        .route_layer(from_fn_with_state(state.clone(), require_auth))
        .route_layer(from_fn_with_state(state, rate_limit))
}
