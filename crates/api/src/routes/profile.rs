use axum::{Router, routing::put};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/profile/availability",
            put(handlers::profile::update_availability),
        )
        .route("/api/profile/status", put(handlers::profile::update_status))
}
