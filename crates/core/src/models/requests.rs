//! Wire-level records exchanged with the HTTP layer.
//!
//! Requests carry times as `HH:MM` strings and days/lecture types as plain
//! names so that validation can report every malformed field at once.
//! Responses always include the derived `end_time`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::conflict::{Conflict, ConflictKind};
use crate::grid::{Grid, GridCell};
use crate::models::time_slot::{LectureType, TimeSlot, Weekday};
use crate::time::format_hhmm;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSlotRequest {
    pub class_id: String,
    pub teacher_id: String,
    pub day_of_week: String,
    pub subject: String,
    pub lecture_type: String,
    pub start_time: String,
    pub duration_minutes: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotResponse {
    pub id: Uuid,
    pub class_id: String,
    pub teacher_id: String,
    pub day_of_week: Weekday,
    pub subject: String,
    pub lecture_type: LectureType,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: u16,
}

impl From<&TimeSlot> for SlotResponse {
    fn from(slot: &TimeSlot) -> Self {
        SlotResponse {
            id: slot.id,
            class_id: slot.class_id.clone(),
            teacher_id: slot.teacher_id.clone(),
            day_of_week: slot.day,
            subject: slot.subject.clone(),
            lecture_type: slot.lecture_type,
            start_time: format_hhmm(slot.start_minute),
            end_time: format_hhmm(slot.end_minute()),
            duration_minutes: slot.duration_minutes,
        }
    }
}

/// One detected collision, with the overlap window formatted for display.
#[derive(Debug, Clone, Serialize)]
pub struct ConflictReport {
    pub kind: ConflictKind,
    pub conflicting_slot_id: Uuid,
    pub day: Weekday,
    pub overlap_start: String,
    pub overlap_end: String,
}

impl From<&Conflict> for ConflictReport {
    fn from(conflict: &Conflict) -> Self {
        ConflictReport {
            kind: conflict.kind,
            conflicting_slot_id: conflict.with_slot_id,
            day: conflict.day,
            overlap_start: format_hhmm(conflict.overlap_start),
            overlap_end: format_hhmm(conflict.overlap_end),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBatchRequest {
    pub slots: Vec<CreateSlotRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBatchResponse {
    pub created: Vec<SlotResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyDayRequest {
    pub source_day: String,
    pub target_day: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyDayResponse {
    pub created: Vec<SlotResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassWeekResponse {
    pub class_id: String,
    pub slots: Vec<SlotResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassTimetable {
    pub class_id: String,
    pub entries: Vec<SlotResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimetableResponse {
    pub classes: Vec<ClassTimetable>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConflictAuditResponse {
    pub conflicts: Vec<ConflictReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridRowResponse {
    pub start_time: String,
    /// Parallel to [`GridResponse::days`]; `None` is a free cell.
    pub cells: Vec<Option<SlotResponse>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridResponse {
    pub class_id: String,
    pub days: Vec<Weekday>,
    pub rows: Vec<GridRowResponse>,
}

impl GridResponse {
    pub fn from_grid(class_id: String, grid: &Grid) -> Self {
        GridResponse {
            class_id,
            days: grid.days.clone(),
            rows: grid
                .rows
                .iter()
                .map(|row| GridRowResponse {
                    start_time: format_hhmm(row.start_minute),
                    cells: row
                        .cells
                        .iter()
                        .map(|cell| match cell {
                            GridCell::Free => None,
                            GridCell::Busy(slot) => Some(SlotResponse::from(slot)),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}
