//! Unified error handling
//!
//! Provides the application error type and the uniform response envelope:
//! - [`AppError`] - application error enum
//! - [`ApiResponse`] - API response envelope
//!
//! Every response, success or failure, is wrapped in the same envelope:
//!
//! ```json
//! {
//!   "success": true,
//!   "data": { ... },
//!   "error": null,
//!   "timestamp": "2026-08-30T12:00:00.000Z"
//! }
//! ```
//!
//! `success` mirrors whether the HTTP status is in [200, 300).

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::db::RepoError;
use crate::utils::time::now_iso;

/// Uniform API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded (status in [200, 300))
    pub success: bool,
    /// Response payload (null on failure)
    pub data: Option<T>,
    /// Error message (null on success)
    pub error: Option<String>,
    /// Current instant, RFC 3339
    pub timestamp: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: now_iso(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            timestamp: now_iso(),
        }
    }
}

/// Application error enum
///
/// | Variant | Status |
/// |---------|--------|
/// | Validation, Invalid | 400 |
/// | Unauthorized | 401 |
/// | NotFound | 404 |
/// | Database, Internal | 500 |
/// | StorageUnavailable | 503 (fatal at startup) |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid request: {0}")]
    Invalid(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Invalid(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::StorageUnavailable(msg) => {
                error!(target: "database", error = %msg, "Storage unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Storage unavailable".to_string(),
                )
            }
        };

        let body = Json(ApiResponse::<()>::failure(message));
        (status, body).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
            RepoError::Unavailable(msg) => AppError::StorageUnavailable(msg),
        }
    }
}

// ========== Envelope helpers ==========

/// Enveloped handler response
pub type Envelope<T> = (StatusCode, Json<ApiResponse<T>>);

/// 200 response with envelope
pub fn ok<T: Serialize>(data: T) -> Envelope<T> {
    (StatusCode::OK, Json(ApiResponse::success(data)))
}

/// 201 response with envelope
pub fn created<T: Serialize>(data: T) -> Envelope<T> {
    (StatusCode::CREATED, Json(ApiResponse::success(data)))
}
