use axum::{
    routing::{delete, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/slots", post(handlers::slots::create_slot))
        .route("/api/slots/batch", post(handlers::slots::create_batch))
        .route("/api/slots/:id", put(handlers::slots::update_slot))
        .route("/api/slots/:id", delete(handlers::slots::delete_slot))
        .route(
            "/api/classes/:class_id/copy-day",
            post(handlers::slots::copy_day),
        )
}
