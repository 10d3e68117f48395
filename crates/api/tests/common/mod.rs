#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use dogule_api::auth::jwt::{JwtConfig, TEST_SECRET};
use dogule_api::config::{RateLimitConfig, ServerConfig};
use dogule_api::router::build_app_router;
use dogule_api::state::AppState;
use dogule_db::Database;

pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Build a test `ServerConfig` with safe defaults and a limit high enough
/// that ordinary tests never hit it.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
        rate_limit: RateLimitConfig {
            window_secs: 60,
            max_requests: 10_000,
            trusted_proxies: Vec::new(),
        },
    }
}

/// Build the production router over `pool`, bootstrapping the schema
/// through the adapter first.
pub async fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config()).await
}

pub async fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    let db = Arc::new(Database::from_pool(pool));
    let pool = db.connect().await.expect("schema bootstrap should succeed");
    let state = AppState::new(pool, db, config.clone());
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("router is infallible")
}

fn json_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::POST, uri, None, body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, json_request(Method::POST, uri, Some(token), body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, json_request(Method::PUT, uri, Some(token), body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// `POST /auth/refresh` presenting `cookie` as the refresh token.
pub async fn post_refresh(app: Router, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder().method(Method::POST).uri("/auth/refresh");
    if let Some(value) = cookie {
        builder = builder.header(COOKIE, format!("dogule_refresh={value}"));
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

/// Value of the `dogule_refresh` cookie set by `response`.
pub fn refresh_cookie_value(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|v| v.strip_prefix("dogule_refresh="))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Register `email` through the API. Returns the access token and the
/// refresh cookie value.
pub async fn register_user(app: Router, email: &str) -> (String, String) {
    let response = post_json(
        app,
        "/auth/register",
        serde_json::json!({ "email": email, "password": TEST_PASSWORD, "name": "Trainer" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let cookie = refresh_cookie_value(&response).expect("register sets the refresh cookie");
    let json = body_json(response).await;
    let token = json["accessToken"]
        .as_str()
        .expect("accessToken in body")
        .to_string();
    (token, cookie)
}

/// Register a throwaway user and return only the access token.
pub async fn access_token(app: Router) -> String {
    register_user(app, "trainer@dogule.test").await.0
}

/// Create a Kunde through the API and return its id.
pub async fn create_kunde(app: Router, token: &str, nachname: &str) -> String {
    let response = post_json_auth(
        app,
        "/api/kunden",
        token,
        serde_json::json!({ "vorname": "Anna", "nachname": nachname }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"]
        .as_str()
        .expect("id in body")
        .to_string()
}
