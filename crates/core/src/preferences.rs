//! Student schedule preferences.
//!
//! A student can hide slot types and restrict the schedule to a set of
//! batches. With no stored rows nothing is filtered: a slot type without a
//! row counts as enabled, and an empty batch selection shows every batch.

use std::collections::{HashMap, HashSet};

use tracing::debug;
use uuid::Uuid;

use crate::{
    access::require_principal,
    errors::CampusResult,
    models::{
        preferences::{
            ActivePreferences, BatchWithPreference, NamedItem, SlotTypePreference,
            SlotTypeWithPreference, StudentPreferences,
        },
        user::Principal,
    },
    repository::PreferenceStore,
};

/// Resolves the filters applied to a student's schedule.
pub async fn active_preferences<S>(store: &S, user_id: Uuid) -> CampusResult<ActivePreferences>
where
    S: PreferenceStore + ?Sized,
{
    let (slot_type_prefs, batch_prefs) = tokio::try_join!(
        store.slot_type_preferences(user_id),
        store.batch_preferences(user_id)
    )?;

    // All slot types are only needed once some preference exists.
    let slot_types = if slot_type_prefs.is_empty() {
        Vec::new()
    } else {
        store.list_slot_types().await?
    };

    Ok(resolve_active(&slot_types, &slot_type_prefs, &batch_prefs))
}

pub fn resolve_active(
    slot_types: &[NamedItem],
    slot_type_prefs: &[SlotTypePreference],
    batch_prefs: &[Uuid],
) -> ActivePreferences {
    let enabled_slot_type_ids = if slot_type_prefs.is_empty() {
        None
    } else {
        let stored = preference_map(slot_type_prefs);
        Some(
            slot_types
                .iter()
                .filter(|slot_type| stored.get(&slot_type.id).copied().unwrap_or(true))
                .map(|slot_type| slot_type.id)
                .collect(),
        )
    };

    let selected_batch_ids = if batch_prefs.is_empty() {
        None
    } else {
        Some(batch_prefs.iter().copied().collect())
    };

    ActivePreferences {
        enabled_slot_type_ids,
        selected_batch_ids,
    }
}

/// The caller's preference view: every slot type and batch with its flag.
pub async fn student_preferences<S>(
    principal: Option<&Principal>,
    store: &S,
) -> CampusResult<StudentPreferences>
where
    S: PreferenceStore + ?Sized,
{
    let principal = require_principal(principal)?;
    let user_id = principal.user_id;

    let (slot_types, slot_type_prefs, batches, batch_prefs) = tokio::try_join!(
        store.list_slot_types(),
        store.slot_type_preferences(user_id),
        store.list_batches(),
        store.batch_preferences(user_id)
    )?;

    let stored = preference_map(&slot_type_prefs);
    let slot_types = slot_types
        .into_iter()
        .map(|slot_type| SlotTypeWithPreference {
            enabled: stored.get(&slot_type.id).copied().unwrap_or(true),
            id: slot_type.id,
            name: slot_type.name,
        })
        .collect();

    let selected: HashSet<Uuid> = batch_prefs.into_iter().collect();
    let batches = batches
        .into_iter()
        .map(|batch| BatchWithPreference {
            selected: selected.contains(&batch.id),
            id: batch.id,
            name: batch.name,
        })
        .collect();

    Ok(StudentPreferences { slot_types, batches })
}

pub async fn set_slot_type_preference<S>(
    principal: Option<&Principal>,
    store: &S,
    slot_type_id: Uuid,
    enabled: bool,
) -> CampusResult<()>
where
    S: PreferenceStore + ?Sized,
{
    let principal = require_principal(principal)?;
    debug!(
        "Setting slot type {} to enabled={} for user {}",
        slot_type_id, enabled, principal.user_id
    );

    store
        .upsert_slot_type_preference(principal.user_id, slot_type_id, enabled)
        .await?;
    Ok(())
}

pub async fn set_batch_preferences<S>(
    principal: Option<&Principal>,
    store: &S,
    batch_ids: &[Uuid],
) -> CampusResult<()>
where
    S: PreferenceStore + ?Sized,
{
    let principal = require_principal(principal)?;

    let mut unique = Vec::with_capacity(batch_ids.len());
    let mut seen = HashSet::new();
    for id in batch_ids {
        if seen.insert(*id) {
            unique.push(*id);
        }
    }

    debug!(
        "Replacing batch preferences for user {} with {} batches",
        principal.user_id,
        unique.len()
    );
    store
        .replace_batch_preferences(principal.user_id, &unique)
        .await?;
    Ok(())
}

fn preference_map(prefs: &[SlotTypePreference]) -> HashMap<Uuid, bool> {
    prefs
        .iter()
        .map(|pref| (pref.slot_type_id, pref.enabled))
        .collect()
}
