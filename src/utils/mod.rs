//! Shared utilities: errors, logging, time and validation helpers.

pub mod error;
pub mod extract;
pub mod logger;
pub mod time;
pub mod validation;

pub use error::{ApiResponse, AppError, Envelope, created, ok};
pub use extract::AppJson;

/// Application-level Result type used in HTTP handlers
pub type AppResult<T> = Result<T, AppError>;
