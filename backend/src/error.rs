//! Application error handling
//!
//! This module provides unified error handling for the API, converting the
//! typed errors of the lower layers into JSend HTTP responses. It is the only
//! place that decides status codes.

use crate::repositories::StoreError;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use events_shared::{AuthError, JSend};
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Both email and password are required")]
    MissingFields,

    #[error("No user with that email found")]
    UserNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Status code and client-facing message; `None` means a server error
    fn classify(&self) -> (StatusCode, Option<String>) {
        match self {
            ApiError::MissingFields => (StatusCode::BAD_REQUEST, Some(self.to_string())),
            ApiError::UserNotFound => (StatusCode::NOT_FOUND, Some(self.to_string())),
            ApiError::InvalidCredentials => (StatusCode::UNAUTHORIZED, Some(self.to_string())),
            ApiError::Auth(kind) => (StatusCode::UNAUTHORIZED, Some(kind.to_string())),
            ApiError::Store(StoreError::Validation(messages)) => {
                (StatusCode::BAD_REQUEST, Some(messages.join(",")))
            }
            ApiError::Store(StoreError::Uniqueness(msg)) => {
                (StatusCode::BAD_REQUEST, Some(msg.clone()))
            }
            ApiError::Store(StoreError::ForeignKey) => (
                StatusCode::BAD_REQUEST,
                Some(StoreError::ForeignKey.to_string()),
            ),
            ApiError::Store(StoreError::Database(err)) => {
                error!("Database error: {:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, Some(msg.clone())),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, Some(msg.clone())),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, Some(msg.clone())),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.classify() {
            (status, Some(message)) => (status, Json(JSend::fail(message))).into_response(),
            (status, None) => {
                (status, Json(JSend::error("Internal server error"))).into_response()
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
