//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the timetable
//! API. It maps domain-specific errors to appropriate HTTP status codes and
//! JSON error responses, ensuring a consistent error handling experience
//! across the entire API.
//!
//! Rejections carry their full detail: a failed validation lists every
//! offending field and a detected conflict lists every colliding slot with
//! its overlap window, so a client can show the whole problem at once
//! instead of a generic failure.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use timetable_core::errors::TimetableError;
use timetable_core::models::requests::ConflictReport;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific `TimetableError` instances and
/// implements `IntoResponse` to convert them into HTTP responses with
/// appropriate status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub TimetableError);

/// Converts application errors to HTTP responses.
///
/// Each error type maps to an HTTP status code, and the response body
/// carries the error message plus any structured detail the error holds.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            TimetableError::NotFound(_) => StatusCode::NOT_FOUND,
            TimetableError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            TimetableError::ConflictDetected(_) => StatusCode::CONFLICT,
            TimetableError::Parse(_) => StatusCode::BAD_REQUEST,
            TimetableError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            TimetableError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.0.to_string();
        let body = match &self.0 {
            TimetableError::ValidationFailed(errors) => Json(json!({
                "error": message,
                "validation_errors": errors,
                "messages": errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
            })),
            TimetableError::ConflictDetected(conflicts) => Json(json!({
                "error": message,
                "conflicts": conflicts.iter().map(ConflictReport::from).collect::<Vec<_>>(),
            })),
            _ => Json(json!({ "error": message })),
        };

        (status, body).into_response()
    }
}

/// Automatic conversion from TimetableError to AppError.
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, TimetableError>` in handler functions that return
/// `Result<T, AppError>`.
impl From<TimetableError> for AppError {
    fn from(err: TimetableError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError.
///
/// Repository functions return `eyre::Result`; this wraps their errors in
/// the `Database` variant so handlers can use `?` directly.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(TimetableError::Database(err))
    }
}

/// Automatic conversion from sqlx::Error to AppError, for transaction
/// begin/commit calls made directly from handlers.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError(TimetableError::Database(err.into()))
    }
}
