#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extract::ExtractError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Everything that can go wrong with an upload is the client's fault, so the
/// whole upload taxonomy maps to 400; extraction detail is logged, never
/// echoed back.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unsupported file type.")]
    UnsupportedFormat { extension: String },

    #[error("Uploaded file is empty.")]
    EmptyUpload,

    #[error("No file uploaded.")]
    MissingFilename,

    #[error("Unable to read file.")]
    ExtractionFailure(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::UnsupportedFormat { extension } => {
                AppError::UnsupportedFormat { extension }
            }
            ExtractError::Malformed(detail) => AppError::ExtractionFailure(detail),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::UnsupportedFormat { extension } => {
                tracing::debug!("rejected upload with extension {extension:?}");
                (
                    StatusCode::BAD_REQUEST,
                    "UNSUPPORTED_FILE_TYPE",
                    "Unsupported file type.".to_string(),
                )
            }
            AppError::EmptyUpload => (
                StatusCode::BAD_REQUEST,
                "EMPTY_UPLOAD",
                "Uploaded file is empty.".to_string(),
            ),
            AppError::MissingFilename => (
                StatusCode::BAD_REQUEST,
                "MISSING_FILENAME",
                "No file uploaded.".to_string(),
            ),
            AppError::ExtractionFailure(detail) => {
                tracing::warn!("extraction failed: {detail}");
                (
                    StatusCode::BAD_REQUEST,
                    "EXTRACTION_FAILED",
                    "Unable to read file.".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
