//! Joining groups by code.
//!
//! Group membership decides which timetables a user sees. A user joins by
//! entering the group's code; codes are case-insensitive and stored upper
//! case. The creator of a group already owns it and cannot join it.

use tracing::info;

use crate::{
    access::require_principal,
    errors::{CampusError, CampusResult},
    models::{group::GroupMembership, user::Principal},
    repository::GroupStore,
};

/// Trims and upper-cases a join code as typed by a user.
pub fn normalize_code(code: &str) -> CampusResult<String> {
    let code = code.trim();
    if code.is_empty() {
        return Err(CampusError::Validation(
            "Group code is required".to_string(),
        ));
    }
    Ok(code.to_uppercase())
}

/// Adds the caller to the group behind `code` with the group's default role.
///
/// # Errors
///
/// * `CampusError::Validation` - blank code, inactive code, the caller
///   created the group, or the caller is already a member
/// * `CampusError::NotFound` - no group has this code
pub async fn join_group<S>(
    principal: Option<&Principal>,
    store: &S,
    code: &str,
) -> CampusResult<GroupMembership>
where
    S: GroupStore + ?Sized,
{
    let principal = require_principal(principal)?;
    let code = normalize_code(code)?;

    let group = store
        .find_group_by_code(&code)
        .await?
        .ok_or_else(|| CampusError::NotFound("Invalid group code".to_string()))?;

    if !group.code_active {
        return Err(CampusError::Validation(
            "This group code is no longer active".to_string(),
        ));
    }

    if group.created_by == Some(principal.user_id) {
        return Err(CampusError::Validation(
            "You are the creator of this group".to_string(),
        ));
    }

    let joined = store
        .add_member(group.id, principal.user_id, group.default_role)
        .await?;
    if !joined {
        return Err(CampusError::Validation(
            "You are already a member of this group".to_string(),
        ));
    }

    info!(
        "User {} joined group {} as {}",
        principal.user_id, group.id, group.default_role
    );

    Ok(GroupMembership {
        group_id: group.id,
        group_name: group.name,
        role: group.default_role,
    })
}
