//! # Schedule Read Handlers
//!
//! Read-only views over the committed slot set: one class's week in
//! canonical order, the sparse day × time grid used for rendering, the
//! full timetable grouped by class (the structure a CSV/Excel exporter
//! walks), and a whole-week conflict audit.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use timetable_core::{
    conflict,
    grid,
    models::requests::{
        ClassTimetable, ClassWeekResponse, ConflictAuditResponse, ConflictReport, GridResponse,
        SlotResponse, TimetableResponse,
    },
};
use timetable_db::{models::into_slots, repositories::slots as slots_repo};

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn get_class_week(
    State(state): State<Arc<ApiState>>,
    Path(class_id): Path<String>,
) -> Result<Json<ClassWeekResponse>, AppError> {
    let mut slots = into_slots(slots_repo::get_slots_by_class(&state.db_pool, &class_id).await?)?;
    grid::sort_week(&mut slots);

    Ok(Json(ClassWeekResponse {
        class_id,
        slots: slots.iter().map(SlotResponse::from).collect(),
    }))
}

#[axum::debug_handler]
pub async fn get_class_grid(
    State(state): State<Arc<ApiState>>,
    Path(class_id): Path<String>,
) -> Result<Json<GridResponse>, AppError> {
    let slots = into_slots(slots_repo::get_slots_by_class(&state.db_pool, &class_id).await?)?;
    let grid = grid::build_grid(&slots);

    Ok(Json(GridResponse::from_grid(class_id, &grid)))
}

#[axum::debug_handler]
pub async fn get_timetable(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<TimetableResponse>, AppError> {
    let slots = into_slots(slots_repo::get_all_slots(&state.db_pool).await?)?;

    let classes = grid::group_by_class(&slots)
        .into_iter()
        .map(|(class_id, entries)| ClassTimetable {
            class_id,
            entries: entries.iter().map(SlotResponse::from).collect(),
        })
        .collect();

    Ok(Json(TimetableResponse { classes }))
}

#[axum::debug_handler]
pub async fn audit_conflicts(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ConflictAuditResponse>, AppError> {
    let slots = into_slots(slots_repo::get_all_slots(&state.db_pool).await?)?;

    Ok(Json(ConflictAuditResponse {
        conflicts: conflict::scan_conflicts(&slots)
            .iter()
            .map(ConflictReport::from)
            .collect(),
    }))
}
