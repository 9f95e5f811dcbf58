use axum::{Json, extract::State, http::StatusCode};
use campussync_core::{
    models::profile::{UpdateAvailabilityRequest, UpdateStatusRequest},
    profile,
};
use std::sync::Arc;

use crate::{
    ApiState,
    middleware::{auth::CurrentPrincipal, error_handling::AppError},
};

/// Sets the caller's Active/Away/Busy status.
#[axum::debug_handler]
pub async fn update_availability(
    State(state): State<Arc<ApiState>>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Json(payload): Json<UpdateAvailabilityRequest>,
) -> Result<StatusCode, AppError> {
    profile::set_availability(
        principal.as_ref(),
        state.profiles.as_ref(),
        payload.availability,
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Sets the caller's status message; an empty message clears it.
#[axum::debug_handler]
pub async fn update_status(
    State(state): State<Arc<ApiState>>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<StatusCode, AppError> {
    profile::set_status(principal.as_ref(), state.profiles.as_ref(), &payload.status).await?;

    Ok(StatusCode::NO_CONTENT)
}
