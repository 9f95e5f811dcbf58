//! Caller checks shared by every engine entry point.

use crate::{
    errors::{CampusError, CampusResult},
    models::user::Principal,
};

/// Fails with `Unauthorized` when there is no resolved caller.
pub fn require_principal(principal: Option<&Principal>) -> CampusResult<&Principal> {
    principal.ok_or_else(CampusError::unauthorized)
}

/// Fails unless the caller is Faculty or HOD.
pub fn require_teaching(principal: Option<&Principal>) -> CampusResult<&Principal> {
    let principal = require_principal(principal)?;
    if principal.role.is_teaching() {
        Ok(principal)
    } else {
        Err(CampusError::Authorization(
            "Only faculty and HOD users can do this".to_string(),
        ))
    }
}
