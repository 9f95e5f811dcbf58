//! Personal weekly schedule.
//!
//! A user sees the slots of every timetable assigned to a group they belong
//! to. Faculty and HOD users only see the slots they teach. Students see the
//! slots left after their slot-type and batch preferences are applied; a slot
//! without a batch is never hidden by the batch filter.

use std::collections::{BTreeMap, HashSet};

use chrono::{Duration, NaiveDate};
use tracing::debug;
use uuid::Uuid;

use crate::{
    access::require_principal,
    errors::CampusResult,
    models::{
        preferences::ActivePreferences,
        schedule::{ScheduleSlot, UserSchedule, WeeklySchedule},
        time_slot::TimeSlotRecord,
        user::{Principal, Role},
        week::{DayOfWeek, sort_by_week_position},
    },
    preferences::active_preferences,
    repository::{PreferenceStore, ScheduleSource},
};

/// How far before and after today lecture summaries are reported.
pub const SUMMARY_WINDOW_DAYS: i64 = 30;

pub async fn weekly_schedule<S, P>(
    principal: Option<&Principal>,
    today: NaiveDate,
    source: &S,
    preferences: &P,
) -> CampusResult<UserSchedule>
where
    S: ScheduleSource + ?Sized,
    P: PreferenceStore + ?Sized,
{
    let principal = require_principal(principal)?;
    let user_id = principal.user_id;

    let (user, slots) = tokio::try_join!(source.get_user(user_id), source.slots_for_member(user_id))?;
    let user_name = match user {
        Some(user) => user.name,
        None => {
            debug!("No user row for {}, schedule shown without a name", user_id);
            String::new()
        }
    };

    let filter = if principal.role == Role::Student {
        active_preferences(preferences, user_id).await?
    } else {
        ActivePreferences::default()
    };

    let visible = visible_slots(principal, &filter, &slots);
    debug!(
        "User {} sees {} of {} slots from their groups",
        user_id,
        visible.len(),
        slots.len()
    );

    let slot_ids: Vec<Uuid> = visible.iter().map(|slot| slot.id).collect();
    let slot_summaries = if slot_ids.is_empty() {
        BTreeMap::new()
    } else {
        let window = Duration::days(SUMMARY_WINDOW_DAYS);
        let dates = source
            .summary_dates(&slot_ids, today - window, today + window)
            .await?;
        group_summary_dates(dates)
    };

    Ok(UserSchedule {
        weekly_schedule: group_by_day(visible),
        today_date: today,
        user_name,
        user_role: principal.role,
        slot_summaries,
    })
}

/// Applies the role and preference rules and collapses repeated slots.
pub fn visible_slots(
    principal: &Principal,
    filter: &ActivePreferences,
    slots: &[TimeSlotRecord],
) -> Vec<ScheduleSlot> {
    let mut seen = HashSet::new();
    slots
        .iter()
        .filter(|slot| is_visible(principal, filter, slot))
        .filter(|slot| seen.insert(slot.id))
        .map(ScheduleSlot::from)
        .collect()
}

fn is_visible(principal: &Principal, filter: &ActivePreferences, slot: &TimeSlotRecord) -> bool {
    if principal.role.is_teaching() {
        return slot.faculty_id() == Some(principal.user_id);
    }

    if let Some(enabled) = &filter.enabled_slot_type_ids {
        if !enabled.contains(&slot.slot_type.id) {
            return false;
        }
    }

    match (&filter.selected_batch_ids, &slot.batch) {
        (Some(selected), Some(batch)) => selected.contains(&batch.id),
        _ => true,
    }
}

/// Buckets slots by weekday, sorted by start time, with all seven days
/// present.
pub fn group_by_day(mut slots: Vec<ScheduleSlot>) -> WeeklySchedule {
    sort_by_week_position(&mut slots);

    let mut week: WeeklySchedule = DayOfWeek::ALL.into_iter().map(|day| (day, Vec::new())).collect();
    for slot in slots {
        week.entry(slot.day).or_default().push(slot);
    }
    week
}

fn group_summary_dates(dates: Vec<(Uuid, NaiveDate)>) -> BTreeMap<Uuid, Vec<String>> {
    let mut grouped: BTreeMap<Uuid, Vec<String>> = BTreeMap::new();
    for (slot_id, date) in dates {
        grouped
            .entry(slot_id)
            .or_default()
            .push(date.format("%Y-%m-%d").to_string());
    }
    grouped
}
