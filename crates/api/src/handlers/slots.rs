//! # Slot Mutation Handlers
//!
//! Create, update, delete, batch-create, and day-copy endpoints. Every
//! mutation runs the same pipeline: structural validation, then conflict
//! detection against a snapshot of the affected days, then commit. All of
//! it happens inside one transaction that holds advisory locks on the
//! touched (day, class) and (day, teacher) scopes, so the conflict check's
//! view of the schedule is still true at commit time even with other
//! writers racing.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use timetable_core::{
    day_copy,
    errors::{TimetableError, ValidationError},
    models::{
        requests::{
            CopyDayRequest, CopyDayResponse, CreateBatchRequest, CreateBatchResponse,
            CreateSlotRequest, SlotResponse,
        },
        time_slot::{SlotCandidate, TimeSlot, Weekday},
    },
    mutation, validation,
};
use timetable_db::{models::into_slots, repositories::slots as slots_repo};
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

fn scope_keys(candidate: &SlotCandidate) -> Vec<String> {
    vec![
        slots_repo::scope_key(candidate.day, "class", &candidate.class_id),
        slots_repo::scope_key(candidate.day, "teacher", &candidate.teacher_id),
    ]
}

#[axum::debug_handler]
pub async fn create_slot(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateSlotRequest>,
) -> Result<(StatusCode, Json<SlotResponse>), AppError> {
    let candidate = validation::validate(&payload).map_err(TimetableError::ValidationFailed)?;

    let mut tx = state.db_pool.begin().await?;
    slots_repo::lock_scopes(&mut tx, scope_keys(&candidate)).await?;

    let rows = slots_repo::get_slots_for_days(&mut *tx, &[candidate.day]).await?;
    let existing = into_slots(rows)?;

    let slot = mutation::plan_create(candidate, &existing)?;
    slots_repo::insert_slot(&mut *tx, &slot).await?;
    tx.commit().await?;

    Ok((StatusCode::CREATED, Json(SlotResponse::from(&slot))))
}

#[axum::debug_handler]
pub async fn update_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateSlotRequest>,
) -> Result<Json<SlotResponse>, AppError> {
    let candidate = validation::validate(&payload).map_err(TimetableError::ValidationFailed)?;

    let mut tx = state.db_pool.begin().await?;

    // The prior instance determines which scopes the slot is vacating; both
    // old and new scopes are locked so neither day's view can shift under
    // the conflict check.
    let current_row = slots_repo::get_slot_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| {
            TimetableError::NotFound(format!("Time slot with ID {} not found", id))
        })?;
    let current = TimeSlot::try_from(current_row)?;

    let mut keys = scope_keys(&candidate);
    keys.push(slots_repo::scope_key(
        current.day,
        "class",
        &current.class_id,
    ));
    keys.push(slots_repo::scope_key(
        current.day,
        "teacher",
        &current.teacher_id,
    ));
    slots_repo::lock_scopes(&mut tx, keys).await?;

    let mut days = vec![current.day, candidate.day];
    days.sort_unstable();
    days.dedup();
    let existing = into_slots(slots_repo::get_slots_for_days(&mut *tx, &days).await?)?;

    let slot = mutation::plan_update(id, candidate, &existing)?;
    slots_repo::update_slot(&mut *tx, &slot)
        .await?
        .ok_or_else(|| {
            TimetableError::NotFound(format!("Time slot with ID {} not found", id))
        })?;
    tx.commit().await?;

    Ok(Json(SlotResponse::from(&slot)))
}

#[axum::debug_handler]
pub async fn delete_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    // Idempotent: deleting an unknown id is a success, so a retried delete
    // cannot fail.
    slots_repo::delete_slot(&state.db_pool, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn create_batch(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateBatchRequest>,
) -> Result<(StatusCode, Json<CreateBatchResponse>), AppError> {
    // Validate the whole batch up front so the response lists every problem
    // across every entry, not just the first bad one.
    let mut errors = Vec::new();
    let mut candidates = Vec::new();
    for request in &payload.slots {
        match validation::validate(request) {
            Ok(candidate) => candidates.push(candidate),
            Err(mut entry_errors) => errors.append(&mut entry_errors),
        }
    }
    if !errors.is_empty() {
        return Err(TimetableError::ValidationFailed(errors).into());
    }
    if candidates.is_empty() {
        return Ok((
            StatusCode::CREATED,
            Json(CreateBatchResponse { created: vec![] }),
        ));
    }

    let mut tx = state.db_pool.begin().await?;

    let keys = candidates.iter().flat_map(|c| scope_keys(c)).collect();
    slots_repo::lock_scopes(&mut tx, keys).await?;

    let mut days: Vec<Weekday> = candidates.iter().map(|c| c.day).collect();
    days.sort_unstable();
    days.dedup();
    let existing = into_slots(slots_repo::get_slots_for_days(&mut *tx, &days).await?)?;

    let accepted = mutation::plan_batch(candidates, &existing)?;
    slots_repo::insert_slots(&mut tx, &accepted).await?;
    tx.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBatchResponse {
            created: accepted.iter().map(SlotResponse::from).collect(),
        }),
    ))
}

#[axum::debug_handler]
pub async fn copy_day(
    State(state): State<Arc<ApiState>>,
    Path(class_id): Path<String>,
    Json(payload): Json<CopyDayRequest>,
) -> Result<(StatusCode, Json<CopyDayResponse>), AppError> {
    let source_day = Weekday::from_name(&payload.source_day).ok_or_else(|| {
        TimetableError::ValidationFailed(vec![ValidationError::InvalidDay {
            value: payload.source_day.clone(),
        }])
    })?;
    let target_day = Weekday::from_name(&payload.target_day).ok_or_else(|| {
        TimetableError::ValidationFailed(vec![ValidationError::InvalidDay {
            value: payload.target_day.clone(),
        }])
    })?;

    let mut tx = state.db_pool.begin().await?;

    // Lock the class on both days before reading the source set: any writer
    // touching this class's slots takes the same class key, so the source
    // snapshot cannot change once these are held.
    slots_repo::lock_scopes(
        &mut tx,
        vec![
            slots_repo::scope_key(source_day, "class", &class_id),
            slots_repo::scope_key(target_day, "class", &class_id),
        ],
    )
    .await?;

    let source_slots = into_slots(
        slots_repo::get_class_day_slots(&mut *tx, &class_id, source_day).await?,
    )?;
    if source_slots.is_empty() {
        return Ok((
            StatusCode::CREATED,
            Json(CopyDayResponse { created: vec![] }),
        ));
    }

    // The teacher set is fixed now; lock each teacher's target day before
    // snapshotting it for the conflict check.
    let mut teacher_keys: Vec<String> = source_slots
        .iter()
        .map(|slot| slots_repo::scope_key(target_day, "teacher", &slot.teacher_id))
        .collect();
    teacher_keys.sort();
    teacher_keys.dedup();
    slots_repo::lock_scopes(&mut tx, teacher_keys).await?;

    let existing = into_slots(slots_repo::get_slots_for_days(&mut *tx, &[target_day]).await?)?;

    // Two-phase copy: generate candidates, then commit them through the
    // batch pipeline. Any conflict rejects the whole copy, so a day is
    // never left half-duplicated.
    let candidates = day_copy::copy_day(&source_slots, target_day);
    let accepted = mutation::plan_batch(candidates, &existing)?;
    slots_repo::insert_slots(&mut tx, &accepted).await?;
    tx.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(CopyDayResponse {
            created: accepted.iter().map(SlotResponse::from).collect(),
        }),
    ))
}
