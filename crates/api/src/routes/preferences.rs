use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/preferences",
            get(handlers::preferences::get_preferences),
        )
        .route(
            "/api/preferences/slot-types/:id",
            put(handlers::preferences::update_slot_type_preference),
        )
        .route(
            "/api/preferences/batches",
            put(handlers::preferences::update_batch_preferences),
        )
}
