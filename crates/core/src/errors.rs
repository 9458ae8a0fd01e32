use serde::Serialize;
use thiserror::Error;

use crate::conflict::Conflict;
use crate::time::ParseTimeError;
use crate::validation::{MAX_DURATION_MINUTES, MIN_DURATION_MINUTES};

/// One structural problem with a candidate slot. Validation collects every
/// problem it finds so a caller can surface all of them at once.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code")]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    MissingField { field: &'static str },

    #[error(
        "duration of {minutes} minutes is outside the allowed {}-{} minute range",
        MIN_DURATION_MINUTES,
        MAX_DURATION_MINUTES
    )]
    DurationOutOfBounds { minutes: u16 },

    #[error("a slot starting at minute {start_minute} with a duration of {duration_minutes} minutes does not fit within the day")]
    TimeOutOfRange {
        start_minute: u16,
        duration_minutes: u16,
    },

    #[error("{value:?} is not a valid day of the academic week")]
    InvalidDay { value: String },

    #[error("{value:?} is not a valid 24-hour HH:MM time")]
    InvalidTime { value: String },

    #[error("{value:?} is not a recognized lecture type")]
    InvalidLectureType { value: String },
}

#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {} error(s)", .0.len())]
    ValidationFailed(Vec<ValidationError>),

    #[error("Booking conflict: {} overlap(s) with existing slots", .0.len())]
    ConflictDetected(Vec<Conflict>),

    #[error("Time parse error: {0}")]
    Parse(#[from] ParseTimeError),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type TimetableResult<T> = Result<T, TimetableError>;
