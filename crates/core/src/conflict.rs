//! Double-booking detection.
//!
//! Two slots conflict when they fall on the same day, share a teacher or a
//! class, and their `[start, end)` intervals overlap. The half-open rule
//! means a slot ending exactly when another starts is not a conflict.

use serde::Serialize;
use uuid::Uuid;

use crate::models::time_slot::{SlotCandidate, TimeSlot, Weekday};

/// Which scope the double-booking occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConflictKind {
    Teacher,
    Class,
}

/// One colliding pair. `with_slot_id` names the already-committed (or
/// earlier-accepted) slot the candidate collided with; the overlap window is
/// reported in minute offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    pub kind: ConflictKind,
    pub with_slot_id: Uuid,
    pub day: Weekday,
    pub overlap_start: u16,
    pub overlap_end: u16,
}

fn overlaps(s1: u16, e1: u16, s2: u16, e2: u16) -> bool {
    s1 < e2 && s2 < e1
}

fn conflict_between(kind: ConflictKind, candidate: &SlotCandidate, slot: &TimeSlot) -> Conflict {
    Conflict {
        kind,
        with_slot_id: slot.id,
        day: candidate.day,
        overlap_start: candidate.start_minute.max(slot.start_minute),
        overlap_end: candidate.end_minute().min(slot.end_minute()),
    }
}

/// Checks one candidate against a snapshot of existing slots and reports
/// every collision, teacher scope first, then class scope, each scope
/// ordered by the colliding slot's start time.
///
/// `exclude` skips the candidate's own prior instance when an update is
/// being re-checked. The snapshot is never mutated; an empty result means
/// no objection.
pub fn find_conflicts(
    candidate: &SlotCandidate,
    exclude: Option<Uuid>,
    existing: &[TimeSlot],
) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for kind in [ConflictKind::Teacher, ConflictKind::Class] {
        let mut scope: Vec<&TimeSlot> = existing
            .iter()
            .filter(|slot| slot.day == candidate.day)
            .filter(|slot| exclude != Some(slot.id))
            .filter(|slot| match kind {
                ConflictKind::Teacher => slot.teacher_id == candidate.teacher_id,
                ConflictKind::Class => slot.class_id == candidate.class_id,
            })
            .collect();
        scope.sort_by_key(|slot| (slot.start_minute, slot.id));

        for slot in scope {
            if overlaps(
                candidate.start_minute,
                candidate.end_minute(),
                slot.start_minute,
                slot.end_minute(),
            ) {
                conflicts.push(conflict_between(kind, candidate, slot));
            }
        }
    }

    conflicts
}

/// Audits an entire committed set for invariant violations.
///
/// Each (day, teacher) and (day, class) subgroup is sorted by start time and
/// swept once with an active window, so the cost is O(n log n) rather than
/// O(n²) pairwise comparison. The output is identical to the pairwise
/// definition: every colliding pair is reported exactly once per scope, with
/// `with_slot_id` naming the earlier-starting slot of the pair. When three or
/// more slots mutually overlap, every pair among them appears.
pub fn scan_conflicts(slots: &[TimeSlot]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for kind in [ConflictKind::Teacher, ConflictKind::Class] {
        let mut ordered: Vec<&TimeSlot> = slots.iter().collect();
        ordered.sort_by_key(|slot| {
            let scope_id = match kind {
                ConflictKind::Teacher => &slot.teacher_id,
                ConflictKind::Class => &slot.class_id,
            };
            (slot.day, scope_id.clone(), slot.start_minute, slot.id)
        });

        let mut active: Vec<&TimeSlot> = Vec::new();
        let mut group_key: Option<(Weekday, &str)> = None;

        for slot in ordered {
            let scope_id = match kind {
                ConflictKind::Teacher => slot.teacher_id.as_str(),
                ConflictKind::Class => slot.class_id.as_str(),
            };
            if group_key != Some((slot.day, scope_id)) {
                group_key = Some((slot.day, scope_id));
                active.clear();
            }

            // Everything still active started at or before this slot, so an
            // active end past this start is an overlap.
            active.retain(|open| open.end_minute() > slot.start_minute);
            for open in &active {
                conflicts.push(Conflict {
                    kind,
                    with_slot_id: open.id,
                    day: slot.day,
                    overlap_start: slot.start_minute.max(open.start_minute),
                    overlap_end: slot.end_minute().min(open.end_minute()),
                });
            }
            active.push(slot);
        }
    }

    conflicts
}
