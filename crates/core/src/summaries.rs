//! Lecture summaries.
//!
//! A summary is attached to one slot on one calendar date. Anyone signed in
//! can read it. Only the Faculty or HOD user who teaches the slot can write
//! it, and writing again on the same date replaces the content.

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::{
    access::{require_principal, require_teaching},
    errors::{CampusError, CampusResult},
    models::{
        schedule::ScheduleSlot,
        summary::{LectureSummary, LectureSummaryView, SaveSummaryRequest, SummaryDraft},
        user::Principal,
        week::DayOfWeek,
    },
    repository::SummaryStore,
};

pub async fn lecture_summary<S>(
    principal: Option<&Principal>,
    store: &S,
    slot_id: Uuid,
    date: NaiveDate,
) -> CampusResult<LectureSummaryView>
where
    S: SummaryStore + ?Sized,
{
    require_principal(principal)?;

    let (summary, slot) = tokio::try_join!(store.get_summary(slot_id, date), store.get_slot(slot_id))?;

    match (summary, slot) {
        (Some(summary), Some(slot)) => Ok(LectureSummaryView {
            summary,
            slot: ScheduleSlot::from(&slot),
        }),
        _ => Err(CampusError::NotFound("Summary not found".to_string())),
    }
}

/// Creates or replaces the summary of `slot_id` on `date`.
///
/// # Errors
///
/// * `CampusError::Authorization` - the caller is a student, or does not
///   teach the slot
/// * `CampusError::NotFound` - no such slot
/// * `CampusError::Validation` - blank content, or `date` is not on the
///   slot's weekday
pub async fn save_lecture_summary<S>(
    principal: Option<&Principal>,
    store: &S,
    slot_id: Uuid,
    date: NaiveDate,
    request: SaveSummaryRequest,
) -> CampusResult<LectureSummary>
where
    S: SummaryStore + ?Sized,
{
    let principal = require_teaching(principal)?;

    let content = request.content.trim();
    if content.is_empty() {
        return Err(CampusError::Validation(
            "Summary content is required".to_string(),
        ));
    }

    let slot = store
        .get_slot(slot_id)
        .await?
        .ok_or_else(|| CampusError::NotFound("Slot not found".to_string()))?;

    if slot.faculty_id() != Some(principal.user_id) {
        return Err(CampusError::Authorization(
            "You can only add summaries for your own slots".to_string(),
        ));
    }

    let weekday = DayOfWeek::of_date(date);
    if weekday != slot.day {
        return Err(CampusError::Validation(format!(
            "{} is a {}, but this slot is on {}",
            date, weekday, slot.day
        )));
    }

    let notes = request
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|notes| !notes.is_empty())
        .map(str::to_string);

    debug!(
        "User {} is saving the summary of slot {} on {}",
        principal.user_id, slot_id, date
    );

    let summary = store
        .upsert_summary(SummaryDraft {
            slot_id,
            date,
            content: content.to_string(),
            notes,
            author_id: principal.user_id,
        })
        .await?;

    Ok(summary)
}
