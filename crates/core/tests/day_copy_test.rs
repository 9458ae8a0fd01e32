use pretty_assertions::assert_eq;
use timetable_core::day_copy::copy_day;
use timetable_core::models::time_slot::{LectureType, TimeSlot, Weekday};
use timetable_core::mutation::plan_batch;
use uuid::Uuid;

fn monday_slot(teacher_id: &str, subject: &str, start_minute: u16) -> TimeSlot {
    TimeSlot {
        id: Uuid::new_v4(),
        class_id: "C1".to_string(),
        teacher_id: teacher_id.to_string(),
        day: Weekday::Monday,
        subject: subject.to_string(),
        lecture_type: LectureType::Tutorial,
        start_minute,
        duration_minutes: 60,
    }
}

#[test]
fn test_copy_changes_only_the_day() {
    let source = vec![
        monday_slot("T1", "Mathematics", 540),
        monday_slot("T2", "History", 600),
    ];
    let copies = copy_day(&source, Weekday::Thursday);

    assert_eq!(copies.len(), 2);
    for (copy, original) in copies.iter().zip(&source) {
        assert_eq!(copy.day, Weekday::Thursday);
        assert_eq!(copy.class_id, original.class_id);
        assert_eq!(copy.teacher_id, original.teacher_id);
        assert_eq!(copy.subject, original.subject);
        assert_eq!(copy.lecture_type, original.lecture_type);
        assert_eq!(copy.start_minute, original.start_minute);
        assert_eq!(copy.duration_minutes, original.duration_minutes);
    }
}

#[test]
fn test_copy_of_empty_day_is_empty() {
    assert_eq!(copy_day(&[], Weekday::Friday), vec![]);
}

#[test]
fn test_committed_copies_get_ids_disjoint_from_existing() {
    let source = vec![
        monday_slot("T1", "Mathematics", 540),
        monday_slot("T2", "History", 600),
    ];
    let copies = copy_day(&source, Weekday::Thursday);
    let accepted = plan_batch(copies, &source).unwrap();

    let source_ids: Vec<Uuid> = source.iter().map(|s| s.id).collect();
    for slot in &accepted {
        assert!(!source_ids.contains(&slot.id));
    }
}

#[test]
fn test_copy_onto_occupied_day_rejects_whole_batch() {
    // Thursday already holds one of the teachers at the copied time; the
    // copy commits all-or-nothing, so the clean copies are rejected too.
    let source = vec![
        monday_slot("T1", "Mathematics", 540),
        monday_slot("T2", "History", 600),
    ];
    let mut thursday_slot = monday_slot("T1", "Geography", 540);
    thursday_slot.day = Weekday::Thursday;
    thursday_slot.class_id = "C2".to_string();

    let mut existing = source.clone();
    existing.push(thursday_slot);

    let copies = copy_day(&source, Weekday::Thursday);
    assert!(plan_batch(copies, &existing).is_err());
}

#[test]
fn test_copy_onto_its_own_day_collides_with_the_source() {
    let source = vec![monday_slot("T1", "Mathematics", 540)];
    let copies = copy_day(&source, Weekday::Monday);
    assert!(plan_batch(copies, &source).is_err());
}
