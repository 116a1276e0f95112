//! Error types for wordmix-server
//!
//! Request-scoped failures map to an HTTP status and a JSON error body.
//! They never terminate the server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Response body could not be encoded (500)
    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::Encoding(ref err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "ENCODING_ERROR",
                err.to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
