use axum::{
    Json,
    extract::{Path, State},
};
use campussync_core::{
    models::summary::{LectureSummary, LectureSummaryView, SaveSummaryRequest},
    summaries,
};
use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    ApiState,
    middleware::{auth::CurrentPrincipal, error_handling::AppError},
};

/// The summary of a slot on a `YYYY-MM-DD` date, with the slot's details.
#[axum::debug_handler]
pub async fn get_summary(
    State(state): State<Arc<ApiState>>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Path((slot_id, date)): Path<(Uuid, NaiveDate)>,
) -> Result<Json<LectureSummaryView>, AppError> {
    let view =
        summaries::lecture_summary(principal.as_ref(), state.summaries.as_ref(), slot_id, date)
            .await?;

    Ok(Json(view))
}

#[axum::debug_handler]
pub async fn save_summary(
    State(state): State<Arc<ApiState>>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Path((slot_id, date)): Path<(Uuid, NaiveDate)>,
    Json(payload): Json<SaveSummaryRequest>,
) -> Result<Json<LectureSummary>, AppError> {
    let summary = summaries::save_lecture_summary(
        principal.as_ref(),
        state.summaries.as_ref(),
        slot_id,
        date,
        payload,
    )
    .await?;

    Ok(Json(summary))
}
