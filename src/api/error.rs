//! API Error Types
//!
//! Defines error types for the API layer and implements conversion to HTTP
//! responses. Validation and uniqueness failures become 400 responses keyed
//! by field name; everything else uses a code/message envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

use crate::store::StoreError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request validation failed on a specific field
    #[error("Validation error on '{field}': {message}")]
    Validation { field: String, message: String },

    /// A write collided with a uniqueness constraint
    #[error("Conflict on '{field}': {message}")]
    Conflict { field: String, message: String },

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// Validation error keyed by field name
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation { field, message } => ApiError::Validation { field, message },
            StoreError::Conflict { field, message } => ApiError::Conflict { field, message },
            StoreError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{} {} not found", entity, id))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Field-keyed body for validation and conflict responses
#[derive(Serialize)]
pub struct FieldErrorResponse {
    /// Failing field name → messages
    pub errors: HashMap<String, Vec<String>>,
}

/// Envelope for non-validation errors
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation { field, message } | ApiError::Conflict { field, message } => {
                tracing::debug!(field = %field, reason = %message, "Rejected request");

                let mut errors = HashMap::new();
                errors.insert(field, vec![message]);
                (StatusCode::BAD_REQUEST, Json(FieldErrorResponse { errors })).into_response()
            }
            ApiError::NotFound(_) => {
                envelope(StatusCode::NOT_FOUND, "NOT_FOUND", &self.to_string())
            }
            ApiError::Internal(_) | ApiError::Io(_) => {
                tracing::error!(error = %self, "API error occurred");
                envelope(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    &self.to_string(),
                )
            }
        }
    }
}

fn envelope(status: StatusCode, code: &str, message: &str) -> Response {
    let body = ErrorResponse {
        error: ErrorBody {
            code: code.to_string(),
            message: message.to_string(),
        },
    };
    (status, Json(body)).into_response()
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
