//! Error types for the Master Server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
///
/// Every request-handling failure ends up here and is converted to a JSON
/// body at the boundary; nothing propagates past the router.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("no file uploaded")]
    NoFileUploaded,

    #[error("invalid file type: {0}")]
    InvalidFileType(String),

    #[error("malformed upload: {0}")]
    Multipart(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::NoFileUploaded => (
                StatusCode::BAD_REQUEST,
                "no file uploaded".to_string(),
                None,
            ),
            AppError::InvalidFileType(name) => (
                StatusCode::BAD_REQUEST,
                format!("invalid file type: {} (only .wav is accepted)", name),
                None,
            ),
            AppError::Multipart(detail) => (
                StatusCode::BAD_REQUEST,
                "failed to read upload".to_string(),
                Some(detail.clone()),
            ),
            AppError::NotFound(name) => (
                StatusCode::NOT_FOUND,
                format!("not found: {}", name),
                None,
            ),
            AppError::Storage(e) => {
                tracing::error!("Storage error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "mastering failed".to_string(),
                    Some(e.to_string()),
                )
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                    Some(detail.clone()),
                )
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            error,
            details,
        });

        (status, body).into_response()
    }
}
