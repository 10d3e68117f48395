//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server or
//! database is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use dogule_api::error::AppError;
use dogule_core::codes;
use dogule_core::error::CoreError;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_maps_to_404_with_entity_code() {
    let err = AppError::Core(CoreError::NotFound {
        code: codes::HUNDE.not_found,
        entity: codes::HUNDE.entity,
        id: uuid::Uuid::nil(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "ERR_HUNDE_NOT_FOUND");
    assert!(json.get("details").is_none());
}

#[tokio::test]
async fn validation_carries_details() {
    let err = AppError::Core(CoreError::Validation {
        code: codes::KALENDER.invalid_payload,
        details: Some(serde_json::json!({ "endAt": "must not be before startAt" })),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "ERR_KALENDER_INVALID_PAYLOAD");
    assert_eq!(json["details"]["endAt"], "must not be before startAt");
}

#[tokio::test]
async fn unauthorized_maps_to_401() {
    let (status, json) =
        error_to_response(CoreError::Unauthorized(codes::AUTH_REFRESH_EXPIRED).into()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "ERR_AUTH_REFRESH_EXPIRED");
}

#[tokio::test]
async fn conflict_maps_to_409() {
    let (status, json) =
        error_to_response(CoreError::Conflict(codes::AUTH_EMAIL_TAKEN).into()).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["message"], "ERR_AUTH_EMAIL_TAKEN");
}

#[tokio::test]
async fn rate_limited_maps_to_429() {
    let (status, json) =
        error_to_response(CoreError::RateLimited(codes::RATE_LIMITED).into()).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["message"], "ERR_RATE_LIMITED");
}

#[tokio::test]
async fn database_failure_keeps_operation_code_and_hides_driver_error() {
    let err = AppError::Database {
        code: codes::KUNDEN.list,
        source: sqlx::Error::PoolTimedOut,
    };

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "ERR_KUNDEN_LIST_001");
    assert!(json.get("details").is_none());
}

#[tokio::test]
async fn bad_request_reports_reason() {
    let (status, json) = error_to_response(AppError::BadRequest("bad uuid".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "ERR_INVALID_REQUEST");
    assert_eq!(json["details"]["reason"], "bad uuid");
}

#[tokio::test]
async fn internal_error_maps_to_500() {
    let (status, json) = error_to_response(AppError::InternalError("boom".into())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "ERR_INTERNAL");
}
