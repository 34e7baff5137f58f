//! Error types for TTMS server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error codes reported in error bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    DbFailure = 3,
    BadValue = 18,
    BadPeriod = 22,
    DataIntegrity = 23,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// Session or semester failed format rules
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// A stored row cannot be turned into a time slot
    #[error("Invalid slot: {0}")]
    InvalidSlot(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Numeric `ErrorCode`
    pub code: u32,
    /// Symbolic `ErrorCode` name, e.g. "BadValue"
    pub error: String,
    /// Human-readable text, including validation messages
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::InvalidPeriod(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadPeriod, msg.clone())
            }
            AppError::InvalidSlot(msg) => {
                tracing::error!("Timetable integrity error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DataIntegrity,
                    "Timetable data integrity error".to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DbFailure,
                    "Database error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
