//! Error types for the risk API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Errors a request handler can answer with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body or parameters failed validation.
    #[error("{0}")]
    BadRequest(String),

    /// No risk exists under the requested id.
    #[error("risk {0} not found")]
    NotFound(String),

    /// The storage backend failed.
    #[error(transparent)]
    Storage(#[from] crate::Error),
}

/// Error response body for API errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Storage(e) => {
                tracing::error!("storage error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        };

        let body = ErrorResponse {
            error: code.to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
