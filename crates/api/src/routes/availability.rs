use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/availability/faculty",
            get(handlers::availability::faculty_availability),
        )
        .route(
            "/api/availability/rooms",
            get(handlers::availability::room_availability),
        )
}
