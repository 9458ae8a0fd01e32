use chrono::{DateTime, Utc};
use eyre::{eyre, Report};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use timetable_core::models::time_slot::{LectureType, TimeSlot, Weekday};
use uuid::Uuid;

/// Storage form of a slot. The day is stored as its 0-5 index and the
/// lecture type by name; `end` is never a column, it is always derived.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTimeSlot {
    pub id: Uuid,
    pub class_id: String,
    pub teacher_id: String,
    pub day_of_week: i16,
    pub subject: String,
    pub lecture_type: String,
    pub start_minute: i16,
    pub duration_minutes: i16,
    pub created_at: DateTime<Utc>,
}

impl DbTimeSlot {
    /// Row form of a committed slot, stamped with the given creation time.
    pub fn from_slot(slot: &TimeSlot, created_at: DateTime<Utc>) -> Self {
        DbTimeSlot {
            id: slot.id,
            class_id: slot.class_id.clone(),
            teacher_id: slot.teacher_id.clone(),
            day_of_week: i16::from(slot.day.index()),
            subject: slot.subject.clone(),
            lecture_type: slot.lecture_type.name().to_string(),
            start_minute: i16::try_from(slot.start_minute).unwrap_or(i16::MAX),
            duration_minutes: i16::try_from(slot.duration_minutes).unwrap_or(i16::MAX),
            created_at,
        }
    }
}

impl TryFrom<DbTimeSlot> for TimeSlot {
    type Error = Report;

    fn try_from(row: DbTimeSlot) -> Result<Self, Self::Error> {
        let day = u8::try_from(row.day_of_week)
            .ok()
            .and_then(Weekday::from_index)
            .ok_or_else(|| eyre!("invalid day_of_week {} in slot {}", row.day_of_week, row.id))?;
        let lecture_type = LectureType::from_name(&row.lecture_type).ok_or_else(|| {
            eyre!(
                "invalid lecture_type {:?} in slot {}",
                row.lecture_type,
                row.id
            )
        })?;
        let start_minute = u16::try_from(row.start_minute)
            .map_err(|_| eyre!("invalid start_minute {} in slot {}", row.start_minute, row.id))?;
        let duration_minutes = u16::try_from(row.duration_minutes).map_err(|_| {
            eyre!(
                "invalid duration_minutes {} in slot {}",
                row.duration_minutes,
                row.id
            )
        })?;

        Ok(TimeSlot {
            id: row.id,
            class_id: row.class_id,
            teacher_id: row.teacher_id,
            day,
            subject: row.subject,
            lecture_type,
            start_minute,
            duration_minutes,
        })
    }
}

/// Decodes a page of rows, failing on the first corrupt one.
pub fn into_slots(rows: Vec<DbTimeSlot>) -> Result<Vec<TimeSlot>, Report> {
    rows.into_iter().map(TimeSlot::try_from).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn sample_slot() -> TimeSlot {
        TimeSlot {
            id: Uuid::new_v4(),
            class_id: "C1".to_string(),
            teacher_id: "T1".to_string(),
            day: Weekday::Wednesday,
            subject: "Physics".to_string(),
            lecture_type: LectureType::Lab,
            start_minute: 540,
            duration_minutes: 120,
        }
    }

    #[test]
    fn row_round_trip_preserves_every_field() {
        let slot = sample_slot();
        let row = DbTimeSlot::from_slot(&slot, Utc::now());
        let back = TimeSlot::try_from(row).unwrap();
        assert_eq!(back, slot);
    }

    #[rstest]
    #[case(-1)]
    #[case(6)]
    #[case(i16::MAX)]
    fn out_of_range_day_fails_decode(#[case] day_of_week: i16) {
        let mut row = DbTimeSlot::from_slot(&sample_slot(), Utc::now());
        row.day_of_week = day_of_week;
        assert!(TimeSlot::try_from(row).is_err());
    }

    #[test]
    fn unknown_lecture_type_fails_decode() {
        let mut row = DbTimeSlot::from_slot(&sample_slot(), Utc::now());
        row.lecture_type = "Workshop".to_string();
        assert!(TimeSlot::try_from(row).is_err());
    }
}
