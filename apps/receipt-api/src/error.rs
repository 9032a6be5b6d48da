//! Error types for the Receipt API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use receipt_core::ValidationError;
use serde_json::json;
use tracing::{error, warn};

use crate::store::StoreError;

/// Message returned for every rejected receipt, whatever the cause.
pub const INVALID_RECEIPT_MESSAGE: &str = "The receipt is invalid";

/// Message returned when no receipt matches the requested id.
pub const NOT_FOUND_MESSAGE: &str = "No receipt found for that id";

/// Receipt API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Invalid receipt: {0}")]
    InvalidReceipt(#[from] ValidationError),

    #[error("Invalid receipt id: {0}")]
    InvalidId(ValidationError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler results.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// HTTP status and machine-readable code for this error.
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::MalformedBody(_) | ApiError::InvalidReceipt(_) => {
                (StatusCode::BAD_REQUEST, "invalid_receipt")
            }
            ApiError::InvalidId(_) => (StatusCode::BAD_REQUEST, "invalid_id"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "store_error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status();

        // Clients get a fixed message; the detail stays in the logs.
        let message = match &self {
            ApiError::MalformedBody(_) | ApiError::InvalidReceipt(_) => INVALID_RECEIPT_MESSAGE,
            ApiError::InvalidId(_) => "The receipt id is invalid",
            ApiError::NotFound(_) => NOT_FOUND_MESSAGE,
            ApiError::Store(_) => "Internal server error",
        };

        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            warn!(error = %self, "Request rejected");
        }

        (
            status,
            Json(json!({
                "error": code,
                "message": message,
            })),
        )
            .into_response()
    }
}
