use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A day of the six-day academic week. There is no Sunday slot anywhere in
/// the system. The derived ordering is the canonical display order,
/// Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Position within the academic week, 0 for Monday through 5 for Saturday.
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Monday" => Some(Weekday::Monday),
            "Tuesday" => Some(Weekday::Tuesday),
            "Wednesday" => Some(Weekday::Wednesday),
            "Thursday" => Some(Weekday::Thursday),
            "Friday" => Some(Weekday::Friday),
            "Saturday" => Some(Weekday::Saturday),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The kind of lecture a slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LectureType {
    Theory,
    Practical,
    Lab,
    Tutorial,
    Seminar,
}

impl LectureType {
    pub const ALL: [LectureType; 5] = [
        LectureType::Theory,
        LectureType::Practical,
        LectureType::Lab,
        LectureType::Tutorial,
        LectureType::Seminar,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Theory" => Some(LectureType::Theory),
            "Practical" => Some(LectureType::Practical),
            "Lab" => Some(LectureType::Lab),
            "Tutorial" => Some(LectureType::Tutorial),
            "Seminar" => Some(LectureType::Seminar),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LectureType::Theory => "Theory",
            LectureType::Practical => "Practical",
            LectureType::Lab => "Lab",
            LectureType::Tutorial => "Tutorial",
            LectureType::Seminar => "Seminar",
        }
    }
}

impl fmt::Display for LectureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A candidate slot that has passed no checks yet and owns no identity.
/// `class_id` and `teacher_id` are opaque references to entities managed
/// elsewhere; this crate never dereferences them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotCandidate {
    pub class_id: String,
    pub teacher_id: String,
    pub day: Weekday,
    pub subject: String,
    pub lecture_type: LectureType,
    pub start_minute: u16,
    pub duration_minutes: u16,
}

impl SlotCandidate {
    /// End of the slot as a minute offset. Derived, never stored.
    pub fn end_minute(&self) -> u16 {
        self.start_minute.saturating_add(self.duration_minutes)
    }
}

/// A committed slot: one recurring weekly lecture occurrence. The `id` is
/// assigned when the slot is accepted and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: Uuid,
    pub class_id: String,
    pub teacher_id: String,
    pub day: Weekday,
    pub subject: String,
    pub lecture_type: LectureType,
    pub start_minute: u16,
    pub duration_minutes: u16,
}

impl TimeSlot {
    /// Promote an accepted candidate into a committed slot under `id`.
    pub fn assign(id: Uuid, candidate: SlotCandidate) -> Self {
        TimeSlot {
            id,
            class_id: candidate.class_id,
            teacher_id: candidate.teacher_id,
            day: candidate.day,
            subject: candidate.subject,
            lecture_type: candidate.lecture_type,
            start_minute: candidate.start_minute,
            duration_minutes: candidate.duration_minutes,
        }
    }

    /// End of the slot as a minute offset. Always recomputed from start and
    /// duration so the two can never drift apart.
    pub fn end_minute(&self) -> u16 {
        self.start_minute.saturating_add(self.duration_minutes)
    }
}
