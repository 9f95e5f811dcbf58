//! # Availability Handlers
//!
//! Free/busy views of the whole campus. Both endpoints return two views of
//! the same data: one row per entity with its occupied and free slots, and
//! one row per distinct slot with the entities that are free or busy in it.

use axum::{Json, extract::State};
use campussync_core::{
    availability,
    models::availability::{FacultyAvailability, RoomAvailability},
};
use std::sync::Arc;

use crate::{
    ApiState,
    middleware::{auth::CurrentPrincipal, error_handling::AppError},
};

/// Faculty availability across every timetable
///
/// # Endpoint
///
/// `GET /api/availability/faculty`
///
/// # Errors
///
/// * `401` - No valid session
/// * `500` - Any read failed; no partial view is returned
#[axum::debug_handler]
pub async fn faculty_availability(
    State(state): State<Arc<ApiState>>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<Json<FacultyAvailability>, AppError> {
    let view = availability::faculty_availability(principal.as_ref(), state.availability.as_ref())
        .await?;

    Ok(Json(view))
}

/// Room availability across every timetable
///
/// # Endpoint
///
/// `GET /api/availability/rooms`
#[axum::debug_handler]
pub async fn room_availability(
    State(state): State<Arc<ApiState>>,
    CurrentPrincipal(principal): CurrentPrincipal,
) -> Result<Json<RoomAvailability>, AppError> {
    let view =
        availability::room_availability(principal.as_ref(), state.availability.as_ref()).await?;

    Ok(Json(view))
}
