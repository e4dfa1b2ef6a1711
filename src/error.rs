//! Server-specific error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use caption_lib::{CaptionError, FailureCategory};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Message returned for upload failures that are not the uploader's fault
pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to process caption file";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    Caption(#[from] CaptionError),

    #[error("{0}")]
    BadRequest(String),

    #[error("Caption file exceeds the upload size limit")]
    UploadTooLarge,

    #[error("Upload processing failed: {0}")]
    UploadFailed(String),

    #[error("Metadata lookup failed: {0}")]
    Metadata(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// Failure category, for the caller-facing taxonomy
    pub fn category(&self) -> Option<FailureCategory> {
        match self {
            ServerError::Caption(e) => Some(e.category()),
            ServerError::BadRequest(_) | ServerError::UploadTooLarge => None,
            _ => Some(FailureCategory::Internal),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ServerError::Caption(_) | ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::UploadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the client
    fn public_message(&self) -> String {
        match self {
            ServerError::Caption(_) | ServerError::BadRequest(_) | ServerError::UploadTooLarge => {
                self.to_string()
            }
            ServerError::UploadFailed(_) => UPLOAD_FAILED_MESSAGE.to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(category = ?self.category(), "{}", self);
        } else {
            tracing::warn!(category = ?self.category(), "Rejected request: {}", self);
        }

        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}
