//! Copying one day's slot set onto another day.
//!
//! The copy is a pure transformation: it produces unchecked candidates with
//! no identity of their own. Committing them is the caller's job, through
//! the same validate-then-conflict pipeline as any other batch, and is
//! all-or-nothing.

use crate::models::time_slot::{SlotCandidate, TimeSlot, Weekday};

/// Produces one candidate per source slot with `day` replaced by
/// `target_day` and every other field copied verbatim. Fresh ids are
/// assigned only when the batch commits, so copies can never collide with
/// their originals by identity.
pub fn copy_day(source_slots: &[TimeSlot], target_day: Weekday) -> Vec<SlotCandidate> {
    source_slots
        .iter()
        .map(|slot| SlotCandidate {
            class_id: slot.class_id.clone(),
            teacher_id: slot.teacher_id.clone(),
            day: target_day,
            subject: slot.subject.clone(),
            lecture_type: slot.lecture_type,
            start_minute: slot.start_minute,
            duration_minutes: slot.duration_minutes,
        })
        .collect()
}
