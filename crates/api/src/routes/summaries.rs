use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/summaries/:slot_id/:date",
        get(handlers::summaries::get_summary).put(handlers::summaries::save_summary),
    )
}
