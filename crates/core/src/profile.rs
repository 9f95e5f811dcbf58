//! Self-reported presence and status message.

use tracing::debug;

use crate::{
    access::require_principal,
    errors::{CampusError, CampusResult},
    models::user::{AvailabilityStatus, Principal},
    repository::ProfileStore,
};

pub const MAX_STATUS_LEN: usize = 100;

/// Sets the caller's availability.
pub async fn set_availability<S>(
    principal: Option<&Principal>,
    store: &S,
    availability: AvailabilityStatus,
) -> CampusResult<()>
where
    S: ProfileStore + ?Sized,
{
    let principal = require_principal(principal)?;
    debug!("User {} is now {}", principal.user_id, availability);

    store
        .update_availability(principal.user_id, availability)
        .await?;
    Ok(())
}

/// Sets or clears the caller's status message.
pub async fn set_status<S>(principal: Option<&Principal>, store: &S, status: &str) -> CampusResult<()>
where
    S: ProfileStore + ?Sized,
{
    let principal = require_principal(principal)?;
    let status = normalize_status(status)?;

    store
        .update_status(principal.user_id, status.map(str::to_string))
        .await?;
    Ok(())
}

/// Trims the message; blank clears it.
pub fn normalize_status(status: &str) -> CampusResult<Option<&str>> {
    let trimmed = status.trim();
    if trimmed.chars().count() > MAX_STATUS_LEN {
        return Err(CampusError::Validation(format!(
            "Status must be {} characters or less",
            MAX_STATUS_LEN
        )));
    }
    Ok((!trimmed.is_empty()).then_some(trimmed))
}
