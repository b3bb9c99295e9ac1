use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use portal_core::{ShiftError, ValidationError};
use shared_types::ErrorResponse;
use thiserror::Error;

use crate::store::StoreError;

/// Error type of every handler. Renders as `{ "error": { "code", "message" } }`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            StoreError::Validation(inner) => ApiError::Validation(inner.to_string()),
            StoreError::Malformed { .. } | StoreError::Poisoned => {
                ApiError::Internal(anyhow::Error::new(e))
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Validation(e.to_string())
    }
}

impl From<ShiftError> for ApiError {
    fn from(e: ShiftError) -> Self {
        ApiError::Validation(e.to_string())
    }
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::Unauthorized => "UNAUTHORIZED",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ApiError::NotFound(msg) | ApiError::Validation(msg) => msg.clone(),
            ApiError::Unauthorized => "Sign-in required".to_string(),
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.code(), message))
    }
}
