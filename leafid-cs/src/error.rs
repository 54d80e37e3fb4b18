//! Error types for leafid-cs
//!
//! `ClassifyError` is the failure taxonomy of the classification pipeline.
//! Nothing in the pipeline retries; every error is the terminal outcome of
//! the request that raised it.
//!
//! `ApiError` maps pipeline and common errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Classification pipeline errors
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// Upload could not be decoded as an image (user-correctable)
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// Model invocation failed
    #[error("Inference failed: {0}")]
    Inference(String),

    /// Model returned an empty score vector
    #[error("Model returned an empty prediction vector")]
    EmptyPrediction,

    /// History could not be persisted
    #[error("Storage error: {0}")]
    Storage(#[from] leafid_common::Error),
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Classification pipeline failure
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    /// leafid-common error
    #[error("Common error: {0}")]
    Common(#[from] leafid_common::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg),
            ApiError::Classify(ref err) => {
                let (status, code) = match err {
                    ClassifyError::InvalidImage(_) => (StatusCode::BAD_REQUEST, "INVALID_IMAGE"),
                    ClassifyError::Inference(_) => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "INFERENCE_ERROR")
                    }
                    ClassifyError::EmptyPrediction => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "EMPTY_PREDICTION")
                    }
                    ClassifyError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
                };
                (status, code, err.to_string())
            }
            ApiError::Common(ref err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "COMMON_ERROR",
                err.to_string(),
            ),
        };

        if status.is_server_error() {
            tracing::error!(code = error_code, "{}", message);
        }

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
