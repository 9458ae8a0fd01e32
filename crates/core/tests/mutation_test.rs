use pretty_assertions::assert_eq;
use timetable_core::conflict::ConflictKind;
use timetable_core::errors::{TimetableError, ValidationError};
use timetable_core::models::time_slot::{LectureType, SlotCandidate, TimeSlot, Weekday};
use timetable_core::mutation::{plan_batch, plan_create, plan_update};
use uuid::Uuid;

fn candidate(
    class_id: &str,
    teacher_id: &str,
    day: Weekday,
    start_minute: u16,
    duration_minutes: u16,
) -> SlotCandidate {
    SlotCandidate {
        class_id: class_id.to_string(),
        teacher_id: teacher_id.to_string(),
        day,
        subject: "Chemistry".to_string(),
        lecture_type: LectureType::Practical,
        start_minute,
        duration_minutes,
    }
}

fn committed(c: SlotCandidate) -> TimeSlot {
    TimeSlot::assign(Uuid::new_v4(), c)
}

#[test]
fn test_plan_create_assigns_fresh_id() {
    let slot = plan_create(candidate("C1", "T1", Weekday::Monday, 540, 60), &[]).unwrap();
    assert_eq!(slot.class_id, "C1");
    assert_eq!(slot.end_minute(), 600);

    let again = plan_create(candidate("C1", "T1", Weekday::Tuesday, 540, 60), &[]).unwrap();
    assert_ne!(slot.id, again.id);
}

#[test]
fn test_plan_create_rejects_invalid_candidate_before_conflict_check() {
    // The duration is invalid AND the slot would collide; validation runs
    // first, so the rejection is ValidationFailed.
    let existing = vec![committed(candidate("C1", "T1", Weekday::Monday, 540, 60))];
    let err = plan_create(candidate("C1", "T1", Weekday::Monday, 540, 10), &existing).unwrap_err();
    match err {
        TimetableError::ValidationFailed(errors) => {
            assert_eq!(
                errors,
                vec![ValidationError::DurationOutOfBounds { minutes: 10 }]
            );
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[test]
fn test_plan_create_rejects_teacher_conflict() {
    // C1/T1 Monday 09:00+60 committed, then C2/T1 Monday 09:30+30 must
    // fail with a teacher conflict for 09:30-10:00.
    let existing = vec![committed(candidate("C1", "T1", Weekday::Monday, 540, 60))];
    let err = plan_create(candidate("C2", "T1", Weekday::Monday, 570, 30), &existing).unwrap_err();
    match err {
        TimetableError::ConflictDetected(conflicts) => {
            assert_eq!(conflicts.len(), 1);
            assert_eq!(conflicts[0].kind, ConflictKind::Teacher);
            assert_eq!(conflicts[0].with_slot_id, existing[0].id);
            assert_eq!(conflicts[0].overlap_start, 570);
            assert_eq!(conflicts[0].overlap_end, 600);
        }
        other => panic!("expected ConflictDetected, got {other:?}"),
    }
}

#[test]
fn test_plan_create_accepts_adjacent_slot() {
    // The same scenario with start 10:00 is exactly adjacent and succeeds.
    let existing = vec![committed(candidate("C1", "T1", Weekday::Monday, 540, 60))];
    assert!(plan_create(candidate("C2", "T1", Weekday::Monday, 600, 30), &existing).is_ok());
}

#[test]
fn test_plan_update_keeps_id_and_excludes_prior_instance() {
    let existing = vec![committed(candidate("C1", "T1", Weekday::Monday, 540, 60))];
    let id = existing[0].id;

    // Shifting the slot by 30 minutes overlaps only itself.
    let updated = plan_update(id, candidate("C1", "T1", Weekday::Monday, 570, 60), &existing)
        .unwrap();
    assert_eq!(updated.id, id);
    assert_eq!(updated.start_minute, 570);
}

#[test]
fn test_plan_update_of_unknown_id_is_not_found() {
    let err = plan_update(
        Uuid::new_v4(),
        candidate("C1", "T1", Weekday::Monday, 540, 60),
        &[],
    )
    .unwrap_err();
    assert!(matches!(err, TimetableError::NotFound(_)));
}

#[test]
fn test_plan_update_still_conflicts_with_other_slots() {
    let first = committed(candidate("C1", "T1", Weekday::Monday, 540, 60));
    let second = committed(candidate("C1", "T1", Weekday::Monday, 600, 60));
    let existing = vec![first.clone(), second.clone()];

    // Stretching the first slot into the second must be rejected.
    let err = plan_update(
        first.id,
        candidate("C1", "T1", Weekday::Monday, 540, 120),
        &existing,
    )
    .unwrap_err();
    match err {
        TimetableError::ConflictDetected(conflicts) => {
            assert!(conflicts.iter().all(|c| c.with_slot_id == second.id));
        }
        other => panic!("expected ConflictDetected, got {other:?}"),
    }
}

#[test]
fn test_plan_batch_accepts_a_conflict_free_week() {
    let week = vec![
        candidate("C1", "T1", Weekday::Monday, 540, 60),
        candidate("C1", "T2", Weekday::Monday, 600, 60),
        candidate("C1", "T1", Weekday::Tuesday, 540, 60),
    ];
    let accepted = plan_batch(week, &[]).unwrap();
    assert_eq!(accepted.len(), 3);

    // Every accepted slot gets its own id.
    let mut ids: Vec<Uuid> = accepted.iter().map(|s| s.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn test_plan_batch_is_all_or_nothing() {
    // Five candidates; the third collides with a committed slot. Nothing
    // is returned for partial commit.
    let existing = vec![committed(candidate("C9", "T9", Weekday::Monday, 540, 60))];
    let batch = vec![
        candidate("C1", "T1", Weekday::Monday, 480, 30),
        candidate("C1", "T2", Weekday::Monday, 510, 30),
        candidate("C1", "T9", Weekday::Monday, 540, 60),
        candidate("C1", "T3", Weekday::Monday, 660, 30),
        candidate("C1", "T4", Weekday::Monday, 690, 30),
    ];

    let err = plan_batch(batch, &existing).unwrap_err();
    match err {
        TimetableError::ConflictDetected(conflicts) => {
            assert_eq!(conflicts.len(), 1);
            assert_eq!(conflicts[0].kind, ConflictKind::Teacher);
            assert_eq!(conflicts[0].with_slot_id, existing[0].id);
        }
        other => panic!("expected ConflictDetected, got {other:?}"),
    }
}

#[test]
fn test_plan_batch_checks_candidates_against_each_other() {
    // The two candidates only collide with each other, not with anything
    // committed.
    let batch = vec![
        candidate("C1", "T1", Weekday::Monday, 540, 60),
        candidate("C2", "T1", Weekday::Monday, 570, 60),
    ];
    let err = plan_batch(batch, &[]).unwrap_err();
    match err {
        TimetableError::ConflictDetected(conflicts) => {
            assert_eq!(conflicts.len(), 1);
            assert_eq!(conflicts[0].overlap_start, 570);
            assert_eq!(conflicts[0].overlap_end, 600);
        }
        other => panic!("expected ConflictDetected, got {other:?}"),
    }
}

#[test]
fn test_plan_batch_aggregates_validation_errors_across_candidates() {
    let batch = vec![
        candidate("C1", "T1", Weekday::Monday, 540, 10),
        candidate("", "T1", Weekday::Monday, 600, 60),
    ];
    let err = plan_batch(batch, &[]).unwrap_err();
    match err {
        TimetableError::ValidationFailed(errors) => {
            assert_eq!(
                errors,
                vec![
                    ValidationError::DurationOutOfBounds { minutes: 10 },
                    ValidationError::MissingField { field: "class_id" },
                ]
            );
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[test]
fn test_plan_batch_of_empty_input_is_empty_success() {
    assert_eq!(plan_batch(vec![], &[]).unwrap(), vec![]);
}
