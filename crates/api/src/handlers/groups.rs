use axum::{Json, extract::State};
use campussync_core::{
    groups,
    models::group::{GroupMembership, JoinGroupRequest},
};
use std::sync::Arc;

use crate::{
    ApiState,
    middleware::{auth::CurrentPrincipal, error_handling::AppError},
};

#[axum::debug_handler]
pub async fn join_group(
    State(state): State<Arc<ApiState>>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Json(payload): Json<JoinGroupRequest>,
) -> Result<Json<GroupMembership>, AppError> {
    let membership =
        groups::join_group(principal.as_ref(), state.groups.as_ref(), &payload.code).await?;

    Ok(Json(membership))
}
