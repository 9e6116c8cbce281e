//! HTTP error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::common::ValidationError;

/// API error type
///
/// Provider failures never show up here; they are reported inside a 200
/// response. Only a bad request or a broken render does.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request (400)
    #[error(transparent)]
    BadRequest(#[from] ValidationError),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::BadRequest(e) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": e.to_string(), "field": e.field }),
            ),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal server error", "field": null }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
