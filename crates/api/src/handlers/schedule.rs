use axum::{Json, extract::State};
use campussync_core::{models::schedule::UserSchedule, schedule};
use chrono::Utc;
use std::sync::Arc;

use crate::{
    ApiState,
    middleware::{auth::CurrentPrincipal, error_handling::AppError},
};

/// `GET /api/schedule`: the caller's weekly schedule.
#[axum::debug_handler]
pub async fn get_schedule(
    State(state): State<Arc<ApiState>>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<Json<UserSchedule>, AppError> {
    let today = Utc::now().date_naive();

    let schedule = schedule::weekly_schedule(
        principal.as_ref(),
        today,
        state.schedules.as_ref(),
        state.preferences.as_ref(),
    )
    .await?;

    Ok(Json(schedule))
}
