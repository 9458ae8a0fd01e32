use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/classes/:class_id/slots",
            get(handlers::grid::get_class_week),
        )
        .route(
            "/api/classes/:class_id/grid",
            get(handlers::grid::get_class_grid),
        )
        .route("/api/timetable", get(handlers::grid::get_timetable))
        .route("/api/conflicts", get(handlers::grid::audit_conflicts))
}
