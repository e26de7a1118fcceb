//! API error type and response mapping.
//!
//! # Design Decisions
//! - Handlers return `Result<_, ApiError>`; the single conversion point in
//!   `into_response` makes a double-send unrepresentable
//! - Every error is logged here (client errors at warn, server errors at
//!   error) and serialized as `{"error": <message>}`

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::http::validation::ValidationError;
use crate::storage::StorageError;

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors a request can end with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body rejected before field validation (not JSON, wrong field type,
    /// not an object).
    #[error("{0}")]
    Malformed(String),

    /// Body exceeded the configured size limit.
    #[error("Request body too large")]
    PayloadTooLarge,

    /// One or more beacon fields failed validation.
    #[error("{}", describe(.0))]
    Validation(Vec<ValidationError>),

    /// The document store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

fn describe(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Malformed(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // The body limit layer surfaces as a buffering rejection; keep its
        // status instead of downgrading it to a 400.
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ApiError::PayloadTooLarge;
        }
        ApiError::Malformed(rejection.body_text())
    }
}

impl From<Vec<ValidationError>> for ApiError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ApiError::Validation(errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %self, "Request rejected");
        }

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
