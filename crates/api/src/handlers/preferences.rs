use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use campussync_core::{
    models::preferences::{
        StudentPreferences, UpdateBatchPreferencesRequest, UpdateSlotTypePreferenceRequest,
    },
    preferences,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    ApiState,
    middleware::{auth::CurrentPrincipal, error_handling::AppError},
};

#[axum::debug_handler]
pub async fn get_preferences(
    State(state): State<Arc<ApiState>>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<Json<StudentPreferences>, AppError> {
    let view = preferences::student_preferences(principal.as_ref(), state.preferences.as_ref())
        .await?;

    Ok(Json(view))
}

#[axum::debug_handler]
pub async fn update_slot_type_preference(
    State(state): State<Arc<ApiState>>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Path(slot_type_id): Path<Uuid>,
    Json(payload): Json<UpdateSlotTypePreferenceRequest>,
) -> Result<StatusCode, AppError> {
    preferences::set_slot_type_preference(
        principal.as_ref(),
        state.preferences.as_ref(),
        slot_type_id,
        payload.enabled,
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn update_batch_preferences(
    State(state): State<Arc<ApiState>>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Json(payload): Json<UpdateBatchPreferencesRequest>,
) -> Result<StatusCode, AppError> {
    preferences::set_batch_preferences(
        principal.as_ref(),
        state.preferences.as_ref(),
        &payload.batch_ids,
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}
