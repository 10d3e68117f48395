use crate::types::DbId;

/// Domain-level failure carrying the stable code that ends up in the
/// response body.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{code}: validation failed")]
    Validation {
        code: &'static str,
        details: Option<serde_json::Value>,
    },

    #[error("{code}: {entity} with id {id} not found")]
    NotFound {
        code: &'static str,
        entity: &'static str,
        id: DbId,
    },

    #[error("{0}: unauthorized")]
    Unauthorized(&'static str),

    #[error("{0}: conflict")]
    Conflict(&'static str),

    #[error("{0}: too many requests")]
    RateLimited(&'static str),

    #[error("{code}: {message}")]
    Internal { code: &'static str, message: String },
}

impl CoreError {
    /// Validation failure without structured details.
    pub fn invalid(code: &'static str) -> Self {
        CoreError::Validation {
            code,
            details: None,
        }
    }

    /// Validation failure built from `validator` field errors.
    pub fn from_validation(code: &'static str, errors: &validator::ValidationErrors) -> Self {
        CoreError::Validation {
            code,
            details: serde_json::to_value(errors).ok(),
        }
    }

    /// The stable error code for this failure.
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::Validation { code, .. }
            | CoreError::NotFound { code, .. }
            | CoreError::Internal { code, .. } => *code,
            CoreError::Unauthorized(code)
            | CoreError::Conflict(code)
            | CoreError::RateLimited(code) => *code,
        }
    }
}
