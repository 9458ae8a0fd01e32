//! Mutation planning: the validate → conflict-check → commit pipeline.
//!
//! Planning is pure. Each function takes a snapshot of the committed slots
//! that could possibly collide with the submission and returns either the
//! slot(s) ready to commit or the full reason for rejection. The caller is
//! responsible for making plan-plus-commit atomic with respect to other
//! writers (the database layer holds per-(day, scope) locks around the
//! two steps), and for deletes, which need no planning: removing an unknown
//! id is a no-op success.

use uuid::Uuid;

use crate::conflict::find_conflicts;
use crate::errors::{TimetableError, TimetableResult};
use crate::models::time_slot::{SlotCandidate, TimeSlot};
use crate::validation::validate_candidate;

/// Plans the creation of a single slot. On success the returned slot
/// carries a freshly assigned id and is ready to insert.
pub fn plan_create(candidate: SlotCandidate, existing: &[TimeSlot]) -> TimetableResult<TimeSlot> {
    let errors = validate_candidate(&candidate);
    if !errors.is_empty() {
        return Err(TimetableError::ValidationFailed(errors));
    }

    let conflicts = find_conflicts(&candidate, None, existing);
    if !conflicts.is_empty() {
        return Err(TimetableError::ConflictDetected(conflicts));
    }

    Ok(TimeSlot::assign(Uuid::new_v4(), candidate))
}

/// Plans an update as a logical delete-then-recreate: the candidate is
/// validated as if new and conflict-checked with the slot's own prior
/// instance excluded from comparison. The id is kept. The snapshot must
/// contain the prior instance; a missing id is a hard failure, unlike
/// delete.
pub fn plan_update(
    id: Uuid,
    candidate: SlotCandidate,
    existing: &[TimeSlot],
) -> TimetableResult<TimeSlot> {
    if !existing.iter().any(|slot| slot.id == id) {
        return Err(TimetableError::NotFound(format!(
            "Time slot with ID {} not found",
            id
        )));
    }

    let errors = validate_candidate(&candidate);
    if !errors.is_empty() {
        return Err(TimetableError::ValidationFailed(errors));
    }

    let conflicts = find_conflicts(&candidate, Some(id), existing);
    if !conflicts.is_empty() {
        return Err(TimetableError::ConflictDetected(conflicts));
    }

    Ok(TimeSlot::assign(id, candidate))
}

/// Plans a batch (one class's full week, or a day copy) all-or-nothing.
///
/// Every candidate is validated first and all validation errors across the
/// whole batch are aggregated. Conflict checking is incremental: each
/// candidate is compared against the existing snapshot and against the
/// candidates already accepted ahead of it, so two submissions inside the
/// same batch cannot double-book each other. Any conflict rejects the
/// entire batch; nothing is returned for partial commit.
pub fn plan_batch(
    candidates: Vec<SlotCandidate>,
    existing: &[TimeSlot],
) -> TimetableResult<Vec<TimeSlot>> {
    let mut all_errors = Vec::new();
    for candidate in &candidates {
        all_errors.extend(validate_candidate(candidate));
    }
    if !all_errors.is_empty() {
        return Err(TimetableError::ValidationFailed(all_errors));
    }

    let mut accepted: Vec<TimeSlot> = Vec::with_capacity(candidates.len());
    let mut all_conflicts = Vec::new();

    for candidate in candidates {
        let mut conflicts = find_conflicts(&candidate, None, existing);
        conflicts.extend(find_conflicts(&candidate, None, &accepted));

        if conflicts.is_empty() {
            accepted.push(TimeSlot::assign(Uuid::new_v4(), candidate));
        } else {
            all_conflicts.extend(conflicts);
        }
    }

    if !all_conflicts.is_empty() {
        return Err(TimetableError::ConflictDetected(all_conflicts));
    }

    Ok(accepted)
}
