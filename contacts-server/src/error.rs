//! HTTP error type for the contacts API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use contacts_store::StoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Result type for request handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors a handler can answer with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Unknown id, or a collection query with no results.
    #[error("not found: {0}")]
    NotFound(String),

    /// Create with an id that is already taken.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Malformed body, path/body id mismatch, or a store refusing a write.
    #[error("invalid request: {0}")]
    Validation(String),

    /// `If-Match` / `If-None-Match` not satisfied.
    #[error("precondition failed: {0}")]
    PreconditionFailed(String),

    /// Anything the client could not have caused.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::PreconditionFailed(_) => StatusCode::PRECONDITION_FAILED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::NotFound(format!("contact {id}")),
            StoreError::Conflict(id) => Self::Conflict(format!("contact {id} already exists")),
            StoreError::IdSpaceExhausted => Self::Validation(err.to_string()),
            StoreError::Io(_) | StoreError::Serialization(_) => Self::Internal(err.to_string()),
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Internal(detail) => {
                error!("Internal error: {}", detail);
                "internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
