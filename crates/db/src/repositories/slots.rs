use chrono::Utc;
use eyre::Result;
use sqlx::{PgExecutor, Postgres, Transaction};
use timetable_core::models::time_slot::{TimeSlot, Weekday};
use uuid::Uuid;

use crate::models::DbTimeSlot;

const SLOT_COLUMNS: &str =
    "id, class_id, teacher_id, day_of_week, subject, lecture_type, start_minute, duration_minutes, created_at";

/// Advisory-lock key for one (day, scope) combination. Conflicting writers
/// hash to the same key, so taking the lock serializes check-then-act
/// commits for that teacher's or class's day.
pub fn scope_key(day: Weekday, scope: &str, id: &str) -> String {
    format!("timetable:{}:{}:{}", day.index(), scope, id)
}

/// Takes transaction-scoped advisory locks for every key. Keys are sorted
/// and deduplicated first so concurrent writers acquire them in the same
/// order and cannot deadlock. The locks release when the transaction ends.
pub async fn lock_scopes(tx: &mut Transaction<'_, Postgres>, mut keys: Vec<String>) -> Result<()> {
    keys.sort();
    keys.dedup();
    for key in keys {
        sqlx::query("SELECT pg_advisory_xact_lock(hashtextextended($1, 0))")
            .bind(key)
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}

/// Inserts a slot whose id the mutation planner has already assigned.
pub async fn insert_slot(executor: impl PgExecutor<'_>, slot: &TimeSlot) -> Result<DbTimeSlot> {
    let row = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        INSERT INTO time_slots (id, class_id, teacher_id, day_of_week, subject, lecture_type, start_minute, duration_minutes, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id, class_id, teacher_id, day_of_week, subject, lecture_type, start_minute, duration_minutes, created_at
        "#,
    )
    .bind(slot.id)
    .bind(&slot.class_id)
    .bind(&slot.teacher_id)
    .bind(i16::from(slot.day.index()))
    .bind(&slot.subject)
    .bind(slot.lecture_type.name())
    .bind(i16::try_from(slot.start_minute)?)
    .bind(i16::try_from(slot.duration_minutes)?)
    .bind(Utc::now())
    .fetch_one(executor)
    .await?;

    Ok(row)
}

/// Inserts a whole accepted batch inside one transaction. The caller only
/// commits if every insert succeeded, which keeps day copies and week
/// submissions all-or-nothing.
pub async fn insert_slots(
    tx: &mut Transaction<'_, Postgres>,
    slots: &[TimeSlot],
) -> Result<Vec<DbTimeSlot>> {
    let mut rows = Vec::with_capacity(slots.len());
    for slot in slots {
        rows.push(insert_slot(&mut **tx, slot).await?);
    }
    Ok(rows)
}

pub async fn get_slot_by_id(
    executor: impl PgExecutor<'_>,
    id: Uuid,
) -> Result<Option<DbTimeSlot>> {
    let row = sqlx::query_as::<_, DbTimeSlot>(&format!(
        "SELECT {SLOT_COLUMNS} FROM time_slots WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(row)
}

pub async fn get_slots_by_class(
    executor: impl PgExecutor<'_>,
    class_id: &str,
) -> Result<Vec<DbTimeSlot>> {
    let rows = sqlx::query_as::<_, DbTimeSlot>(&format!(
        "SELECT {SLOT_COLUMNS} FROM time_slots WHERE class_id = $1 ORDER BY day_of_week ASC, start_minute ASC, id ASC"
    ))
    .bind(class_id)
    .fetch_all(executor)
    .await?;

    Ok(rows)
}

/// One class's slots on a single day, in start order; the source set for a
/// day copy.
pub async fn get_class_day_slots(
    executor: impl PgExecutor<'_>,
    class_id: &str,
    day: Weekday,
) -> Result<Vec<DbTimeSlot>> {
    let rows = sqlx::query_as::<_, DbTimeSlot>(&format!(
        "SELECT {SLOT_COLUMNS} FROM time_slots WHERE class_id = $1 AND day_of_week = $2 ORDER BY start_minute ASC, id ASC"
    ))
    .bind(class_id)
    .bind(i16::from(day.index()))
    .fetch_all(executor)
    .await?;

    Ok(rows)
}

/// Every slot on any of the given days; the snapshot the conflict check
/// runs against while the scope locks are held.
pub async fn get_slots_for_days(
    executor: impl PgExecutor<'_>,
    days: &[Weekday],
) -> Result<Vec<DbTimeSlot>> {
    let day_indexes: Vec<i16> = days.iter().map(|day| i16::from(day.index())).collect();

    let rows = sqlx::query_as::<_, DbTimeSlot>(&format!(
        "SELECT {SLOT_COLUMNS} FROM time_slots WHERE day_of_week = ANY($1) ORDER BY start_minute ASC, id ASC"
    ))
    .bind(day_indexes)
    .fetch_all(executor)
    .await?;

    Ok(rows)
}

pub async fn get_all_slots(executor: impl PgExecutor<'_>) -> Result<Vec<DbTimeSlot>> {
    let rows = sqlx::query_as::<_, DbTimeSlot>(&format!(
        "SELECT {SLOT_COLUMNS} FROM time_slots ORDER BY class_id ASC, day_of_week ASC, start_minute ASC, id ASC"
    ))
    .fetch_all(executor)
    .await?;

    Ok(rows)
}

/// Rewrites every mutable field of an existing slot; the id never changes.
pub async fn update_slot(
    executor: impl PgExecutor<'_>,
    slot: &TimeSlot,
) -> Result<Option<DbTimeSlot>> {
    let row = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        UPDATE time_slots
        SET class_id = $2, teacher_id = $3, day_of_week = $4, subject = $5, lecture_type = $6, start_minute = $7, duration_minutes = $8
        WHERE id = $1
        RETURNING id, class_id, teacher_id, day_of_week, subject, lecture_type, start_minute, duration_minutes, created_at
        "#,
    )
    .bind(slot.id)
    .bind(&slot.class_id)
    .bind(&slot.teacher_id)
    .bind(i16::from(slot.day.index()))
    .bind(&slot.subject)
    .bind(slot.lecture_type.name())
    .bind(i16::try_from(slot.start_minute)?)
    .bind(i16::try_from(slot.duration_minutes)?)
    .fetch_optional(executor)
    .await?;

    Ok(row)
}

/// Deletes by id. Deleting an id that does not exist is a no-op success,
/// so retried deletes stay idempotent.
pub async fn delete_slot(executor: impl PgExecutor<'_>, id: Uuid) -> Result<()> {
    sqlx::query("DELETE FROM time_slots WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(())
}
