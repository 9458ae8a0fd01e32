//! Structural validation of candidate slots.
//!
//! Validation never short-circuits: every problem with a submission is
//! collected so the caller can report them all in one round trip.

use crate::errors::ValidationError;
use crate::models::requests::CreateSlotRequest;
use crate::models::time_slot::{LectureType, SlotCandidate, Weekday};
use crate::time::{self, LAST_MINUTE};

/// Shortest lecture the timetable accepts, in minutes.
pub const MIN_DURATION_MINUTES: u16 = 30;

/// Longest lecture the timetable accepts, in minutes.
pub const MAX_DURATION_MINUTES: u16 = 180;

/// Validates a wire-level submission and, when everything checks out,
/// produces the typed candidate. On failure the full list of problems is
/// returned.
pub fn validate(request: &CreateSlotRequest) -> Result<SlotCandidate, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if request.class_id.trim().is_empty() {
        errors.push(ValidationError::MissingField { field: "class_id" });
    }
    if request.teacher_id.trim().is_empty() {
        errors.push(ValidationError::MissingField { field: "teacher_id" });
    }
    if request.subject.trim().is_empty() {
        errors.push(ValidationError::MissingField { field: "subject" });
    }

    let day = if request.day_of_week.trim().is_empty() {
        errors.push(ValidationError::MissingField {
            field: "day_of_week",
        });
        None
    } else {
        let parsed = Weekday::from_name(&request.day_of_week);
        if parsed.is_none() {
            errors.push(ValidationError::InvalidDay {
                value: request.day_of_week.clone(),
            });
        }
        parsed
    };

    let lecture_type = LectureType::from_name(&request.lecture_type);
    if lecture_type.is_none() {
        errors.push(ValidationError::InvalidLectureType {
            value: request.lecture_type.clone(),
        });
    }

    let start_minute = match time::parse_hhmm(&request.start_time) {
        Ok(minute) => Some(minute),
        Err(_) => {
            errors.push(ValidationError::InvalidTime {
                value: request.start_time.clone(),
            });
            None
        }
    };

    if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&request.duration_minutes) {
        errors.push(ValidationError::DurationOutOfBounds {
            minutes: request.duration_minutes,
        });
    }

    if let Some(start) = start_minute {
        if time::end_minute(start, request.duration_minutes) > u32::from(LAST_MINUTE) {
            errors.push(ValidationError::TimeOutOfRange {
                start_minute: start,
                duration_minutes: request.duration_minutes,
            });
        }
    }

    match (errors.is_empty(), day, lecture_type, start_minute) {
        (true, Some(day), Some(lecture_type), Some(start_minute)) => Ok(SlotCandidate {
            class_id: request.class_id.clone(),
            teacher_id: request.teacher_id.clone(),
            day,
            subject: request.subject.clone(),
            lecture_type,
            start_minute,
            duration_minutes: request.duration_minutes,
        }),
        _ => Err(errors),
    }
}

/// Re-checks the numeric invariants on an already-typed candidate. Used by
/// the mutation planner so that candidates built in code (day copies, tests)
/// pass through the same bounds as wire submissions.
pub fn validate_candidate(candidate: &SlotCandidate) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if candidate.class_id.trim().is_empty() {
        errors.push(ValidationError::MissingField { field: "class_id" });
    }
    if candidate.teacher_id.trim().is_empty() {
        errors.push(ValidationError::MissingField { field: "teacher_id" });
    }
    if candidate.subject.trim().is_empty() {
        errors.push(ValidationError::MissingField { field: "subject" });
    }

    if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&candidate.duration_minutes) {
        errors.push(ValidationError::DurationOutOfBounds {
            minutes: candidate.duration_minutes,
        });
    }

    if candidate.start_minute > LAST_MINUTE
        || time::end_minute(candidate.start_minute, candidate.duration_minutes)
            > u32::from(LAST_MINUTE)
    {
        errors.push(ValidationError::TimeOutOfRange {
            start_minute: candidate.start_minute,
            duration_minutes: candidate.duration_minutes,
        });
    }

    errors
}
