//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain_claims::ClaimError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Conflict with an explicit wire-level error label; the duplicate
    /// claim response shape is part of the external contract
    #[error("{message}")]
    Conflict { label: String, message: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_label, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found".to_string(), msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request".to_string(), msg),
            ApiError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "unauthorized".to_string(), msg)
            }
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "forbidden".to_string(), msg),
            ApiError::Conflict { label, message } => (StatusCode::CONFLICT, label, message),
            ApiError::Validation(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error".to_string(),
                msg,
            ),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error".to_string(),
                msg,
            ),
        };

        let body = ErrorResponse {
            success: false,
            error: error_label,
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ClaimError> for ApiError {
    fn from(err: ClaimError) -> Self {
        match &err {
            ClaimError::DuplicateClaim { existing_status } => ApiError::Conflict {
                label: "Duplicate claim detected".to_string(),
                message: format!(
                    "A {existing_status} claim already exists for this medical record."
                ),
            },
            ClaimError::InvalidStatusTransition { .. } => ApiError::Conflict {
                label: "invalid_transition".to_string(),
                message: err.to_string(),
            },
            ClaimError::ClaimNotFound(_) | ClaimError::RecordNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            ClaimError::NotClaimable(_) | ClaimError::Validation(_) => {
                ApiError::Validation(err.to_string())
            }
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err.to_string())
    }
}
