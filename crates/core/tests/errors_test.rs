use std::error::Error;
use timetable_core::conflict::{Conflict, ConflictKind};
use timetable_core::errors::{TimetableError, TimetableResult, ValidationError};
use timetable_core::models::time_slot::Weekday;
use timetable_core::time::parse_hhmm;
use uuid::Uuid;

#[test]
fn test_timetable_error_display() {
    let not_found = TimetableError::NotFound("Time slot not found".to_string());
    let validation = TimetableError::ValidationFailed(vec![
        ValidationError::MissingField { field: "subject" },
        ValidationError::DurationOutOfBounds { minutes: 10 },
    ]);
    let conflict = TimetableError::ConflictDetected(vec![Conflict {
        kind: ConflictKind::Class,
        with_slot_id: Uuid::new_v4(),
        day: Weekday::Friday,
        overlap_start: 540,
        overlap_end: 570,
    }]);
    let database = TimetableError::Database(eyre::eyre!("Database connection failed"));
    let internal = TimetableError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(
        not_found.to_string(),
        "Resource not found: Time slot not found"
    );
    assert_eq!(validation.to_string(), "Validation failed: 2 error(s)");
    assert_eq!(
        conflict.to_string(),
        "Booking conflict: 1 overlap(s) with existing slots"
    );
    assert!(database.to_string().contains("Database error:"));
    assert!(internal.to_string().contains("Internal error:"));
}

#[test]
fn test_validation_error_messages_name_the_problem() {
    assert_eq!(
        ValidationError::MissingField { field: "class_id" }.to_string(),
        "class_id must not be empty"
    );
    assert_eq!(
        ValidationError::DurationOutOfBounds { minutes: 181 }.to_string(),
        "duration of 181 minutes is outside the allowed 30-180 minute range"
    );
    assert!(ValidationError::InvalidDay {
        value: "Sunday".to_string()
    }
    .to_string()
    .contains("Sunday"));
}

#[test]
fn test_parse_error_converts_into_timetable_error() {
    let parse_error = parse_hhmm("25:00").unwrap_err();
    let timetable_error = TimetableError::from(parse_error);
    assert!(timetable_error.to_string().contains("25:00"));
}

#[test]
fn test_timetable_result() {
    let result: TimetableResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: TimetableResult<i32> = Err(TimetableError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_from_trait_implementation() {
    let eyre_error = eyre::eyre!("Database error");
    let timetable_error = TimetableError::Database(eyre_error);

    assert!(timetable_error.to_string().contains("Database error"));
}

#[test]
fn test_box_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let boxed_error: Box<dyn Error + Send + Sync> = Box::new(io_error);
    let timetable_error = TimetableError::Internal(boxed_error);

    assert!(timetable_error.to_string().contains("IO error"));
}
