//! Application Error Types
//!
//! Centralized error handling with Axum integration. Every failure leaves
//! the service as a `{"error": "<message>"}` JSON body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// Message returned for malformed requests and for every server-side failure.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Malformed request body")]
    Decode,

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Decode | AppError::Validation(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Internal(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the client.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Validation(kind) => kind.to_string(),
            AppError::BadRequest(msg) | AppError::NotFound(msg) | AppError::Forbidden(msg) => {
                msg.clone()
            }
            AppError::Decode | AppError::Internal(_) | AppError::Database(_) => {
                GENERIC_ERROR_MESSAGE.into()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Internal(msg) => tracing::error!("Internal error: {}", msg),
            AppError::Database(e) => tracing::error!("Database error: {}", e),
            other => tracing::debug!(error = %other, "Request rejected"),
        }

        let body = ErrorResponse {
            error: self.client_message(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}
