pub mod auth;
pub mod finanzen;
pub mod graphql;
pub mod health;
pub mod hunde;
pub mod kalender;
pub mod kommunikation;
pub mod kunden;
pub mod kurse;

use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::middleware::auth::require_auth;
use crate::state::AppState;

/// Build the route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health /ready /docs.json                        public
///
/// /auth/register /auth/login /auth/refresh         public, rate limited
/// /auth/me /auth/logout                            bearer, rate limited
///
/// /api/kunden                                      list, create
/// /api/kunden/{id}                                 get, update, delete
/// /api/kunden/{id}/hunde                           dogs of a customer
/// /api/kunden/{id}/kommunikation                   messages of a customer
/// /api/hunde[/{id}]                                CRUD
/// /api/kurse[/{id}]                                CRUD
/// /api/kurse/{id}/termine                          events of a course
/// /api/finanzen[/{id}]                             CRUD
/// /api/finanzen/summary                            income, expenses, balance
/// /api/kalender[/{id}]                             CRUD
/// /api/kommunikation[/{id}]                        CRUD
///
/// /dashboard                                       aggregated totals
/// /graphql                                         bearer, rate limited
/// ```
pub fn app_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/auth", auth::router(state.clone()))
        .nest("/api", api_routes(state.clone()))
        .merge(protected(
            Router::new().route("/dashboard", get(handlers::dashboard::summary)),
            state.clone(),
        ))
        .merge(graphql::router(state))
}

/// Resource routes under `/api`, all behind the bearer gate.
fn api_routes(state: AppState) -> Router<AppState> {
    let routes = Router::new()
        .nest("/kunden", kunden::router())
        .nest("/hunde", hunde::router())
        .nest("/kurse", kurse::router())
        .nest("/finanzen", finanzen::router())
        .nest("/kalender", kalender::router())
        .nest("/kommunikation", kommunikation::router());
    protected(routes, state)
}

fn protected(routes: Router<AppState>, state: AppState) -> Router<AppState> {
    routes.route_layer(from_fn_with_state(state, require_auth))
}
