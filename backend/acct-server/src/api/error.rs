//! REST API error types
//!
//! Every failure leaves the server as `{"error": {"code", "message", "field"?}}`
//! with a matching HTTP status.

use acct_core::CoreError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// Message returned for a certification code mismatch
pub const CERTIFICATION_FAILED_MESSAGE: &str = "자격 증명에 실패하였습니다.";

#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND")
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// 404
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// 400
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// 401, caller identity missing
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// 403, certification code mismatch
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// 409, duplicate email or concurrent modification
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// 500
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::Unauthorized { .. } => "UNAUTHORIZED",
            ApiError::Forbidden { .. } => "FORBIDDEN",
            ApiError::Conflict { .. } => "CONFLICT",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: &str) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::error!("{}", self);

        let status = self.status();
        let code = self.code();

        let body = match self {
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                code: code.into(),
                message,
                field,
            },
            ApiError::NotFound { message, .. }
            | ApiError::Unauthorized { message, .. }
            | ApiError::Forbidden { message, .. }
            | ApiError::Conflict { message, .. }
            | ApiError::Internal { message, .. } => ApiErrorBody {
                code: code.into(),
                message,
                field: None,
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Domain errors keep their user-facing message; storage details stay in the log.
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            CoreError::ResourceNotFound { resource, id, .. } => ApiError::NotFound {
                message: format!("{}에서 ID {}를 찾을 수 없습니다.", resource, id),
                location,
            },
            CoreError::CertificationCodeNotMatched { .. } => ApiError::Forbidden {
                message: CERTIFICATION_FAILED_MESSAGE.to_string(),
                location,
            },
            CoreError::Conflict { message, .. } => {
                log::warn!("Persistence conflict: {}", message);
                ApiError::Conflict {
                    message: "The account already exists or was modified concurrently"
                        .to_string(),
                    location,
                }
            }
            other => {
                log::error!("Account operation failed: {}", other);
                ApiError::Internal {
                    message: "Account operation failed".to_string(),
                    location,
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
