//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// Each variant maps to one HTTP status via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Chat request carried no message text
    #[error("Message is required")]
    MessageRequired,

    /// Requested model is not in the catalog
    #[error("Model not found")]
    ModelNotFound(String),

    /// Request body was missing, not JSON, or had the wrong shape
    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MessageRequired => StatusCode::BAD_REQUEST,
            AppError::ModelNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidBody(rejection) => rejection.status(),
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            AppError::Internal(e) => tracing::error!(error = %e, "Request failed"),
            AppError::ModelNotFound(model) => {
                tracing::warn!(model = %model, "Unknown model requested")
            }
            AppError::InvalidBody(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Rejected request body")
            }
            AppError::MessageRequired => {}
        }

        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
