//! The fixed-window limiter on `/auth/*` and `/graphql`.

mod common;

use std::net::{IpAddr, SocketAddr};

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use common::{body_json, get};
use dogule_api::config::RateLimitConfig;
use sqlx::PgPool;
use tower::ServiceExt;

fn login_from(peer: [u8; 4], forwarded: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/auth/login")
        .header(CONTENT_TYPE, "application/json");
    if let Some(forwarded) = forwarded {
        builder = builder.header("x-forwarded-for", forwarded);
    }
    let mut request = builder
        .body(Body::from(
            serde_json::json!({ "email": "x@dogule.test", "password": "whatever1" }).to_string(),
        ))
        .unwrap();
    request
        .extensions_mut()
        .insert(ConnectInfo(SocketAddr::from((peer, 40_000))));
    request
}

async fn limited_app(pool: PgPool, trusted_proxies: Vec<IpAddr>) -> Router {
    let mut config = common::test_config();
    config.rate_limit = RateLimitConfig {
        window_secs: 60,
        max_requests: 2,
        trusted_proxies,
    };
    common::build_test_app_with(pool, config).await
}

#[sqlx::test]
async fn third_auth_request_in_window_is_limited(pool: PgPool) {
    let app = limited_app(pool, Vec::new()).await;
    let client = [198, 51, 100, 1];

    for _ in 0..2 {
        let response = app.clone().oneshot(login_from(client, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    let response = app.clone().oneshot(login_from(client, None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body_json(response).await["message"], "ERR_RATE_LIMITED");

    // Other clients and unlimited routes are unaffected.
    let response = app
        .clone()
        .oneshot(login_from([198, 51, 100, 2], None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test]
async fn rotating_forwarded_for_does_not_reset_the_window(pool: PgPool) {
    let app = limited_app(pool, Vec::new()).await;
    let client = [198, 51, 100, 1];

    let mut statuses = Vec::new();
    for i in 0..5 {
        let forwarded = format!("10.0.0.{i}");
        let response = app
            .clone()
            .oneshot(login_from(client, Some(&forwarded)))
            .await
            .unwrap();
        statuses.push(response.status());
    }

    assert_eq!(&statuses[..2], &[StatusCode::UNAUTHORIZED; 2]);
    assert!(statuses[2..]
        .iter()
        .all(|s| *s == StatusCode::TOO_MANY_REQUESTS));
}

#[sqlx::test]
async fn trusted_proxy_is_keyed_per_forwarded_client(pool: PgPool) {
    let proxy = [10, 0, 0, 1];
    let app = limited_app(pool, vec![IpAddr::from(proxy)]).await;

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(login_from(proxy, Some("203.0.113.7")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
    let response = app
        .clone()
        .oneshot(login_from(proxy, Some("203.0.113.7")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    // A different client behind the same proxy has its own window.
    let response = app
        .oneshot(login_from(proxy, Some("203.0.113.8")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
