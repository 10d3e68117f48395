use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use dogule_core::codes::{self, EntityCodes};
use dogule_core::error::CoreError;

use crate::response::ErrorBody;

/// Application-level error type for HTTP handlers and GraphQL resolvers.
///
/// Wraps [`CoreError`] for domain errors and adds transport-specific variants.
/// Every variant resolves to one stable code, which becomes the `message`
/// field of the response body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `dogule_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A repository call failed. `code` names the operation.
    #[error("{code}: {source}")]
    Database {
        code: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// Malformed request (unparseable JSON, bad path or query parameter).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Stable error code sent as `message`.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Core(core) => core.code(),
            AppError::Database { code, .. } => *code,
            AppError::BadRequest(_) => codes::INVALID_REQUEST,
            AppError::InternalError(_) => codes::INTERNAL,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Core(core) => match core {
                CoreError::Validation { .. } => StatusCode::BAD_REQUEST,
                CoreError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
                CoreError::NotFound { .. } => StatusCode::NOT_FOUND,
                CoreError::Conflict(_) => StatusCode::CONFLICT,
                CoreError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
                CoreError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database { .. } | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Validation detail for the `details` field, if any.
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::Core(CoreError::Validation { details, .. }) => details.clone(),
            AppError::BadRequest(reason) => Some(serde_json::json!({ "reason": reason })),
            _ => None,
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            message: self.code().to_string(),
            details: self.details(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Repository failures were logged where they were wrapped.
        if matches!(
            self,
            AppError::InternalError(_) | AppError::Core(CoreError::Internal { .. })
        ) {
            tracing::error!(code = self.code(), error = %self, "Internal error");
        }
        (status, axum::Json(self.body())).into_response()
    }
}

/// Unwrap a JSON body, reporting a malformed one as `code` (400).
pub fn json_payload<T>(
    code: &'static str,
    payload: Result<axum::Json<T>, JsonRejection>,
) -> AppResult<T> {
    payload.map(|axum::Json(value)| value).map_err(|rejection| {
        AppError::Core(CoreError::Validation {
            code,
            details: Some(serde_json::json!({ "reason": rejection.body_text() })),
        })
    })
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl async_graphql::ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        let status = self.status().as_u16();
        let details = self
            .details()
            .and_then(|d| async_graphql::Value::from_json(d).ok());
        async_graphql::Error::new(code).extend_with(|_, ext| {
            ext.set("code", code.to_string());
            ext.set("status", status);
            if let Some(details) = details.clone() {
                ext.set("details", details);
            }
        })
    }
}

/// Map a failed repository call to an [`AppError`] carrying `op_code`.
///
/// Foreign-key and check violations mean the payload referenced a missing
/// row or broke a table constraint, so they surface as the entity's
/// `INVALID_PAYLOAD` (400) instead of a 500.
pub fn db_failure(
    entity: EntityCodes,
    op_code: &'static str,
) -> impl FnOnce(sqlx::Error) -> AppError {
    move |err| {
        if let sqlx::Error::Database(db_err) = &err {
            // 23503 foreign_key_violation, 23514 check_violation
            if matches!(db_err.code().as_deref(), Some("23503") | Some("23514")) {
                tracing::debug!(
                    entity = entity.entity,
                    constraint = db_err.constraint().unwrap_or("unknown"),
                    "Constraint rejected payload"
                );
                return AppError::Core(CoreError::Validation {
                    code: entity.invalid_payload,
                    details: db_err
                        .constraint()
                        .map(|c| serde_json::json!({ "constraint": c })),
                });
            }
        }
        database_error(op_code)(err)
    }
}

/// Log a repository failure and wrap it in `code`.
pub fn database_error(code: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |source| {
        tracing::error!(code, error = %source, "Database operation failed");
        AppError::Database { code, source }
    }
}
