use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    time_slot::TimeSlotRecord,
    user::Role,
    week::{DayOfWeek, SlotTime, WeekPosition},
};

/// A slot as it appears on a user's personal weekly schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlot {
    pub id: Uuid,
    pub day: DayOfWeek,
    pub start_time: SlotTime,
    pub end_time: SlotTime,
    pub subject_name: Option<String>,
    pub subject_short_name: Option<String>,
    pub slot_type_name: String,
    pub room_number: Option<String>,
    pub faculty_name: Option<String>,
    pub batch_name: Option<String>,
    pub is_break: bool,
}

impl From<&TimeSlotRecord> for ScheduleSlot {
    fn from(slot: &TimeSlotRecord) -> Self {
        let subject = slot.occupancy.subject();
        ScheduleSlot {
            id: slot.id,
            day: slot.day,
            start_time: slot.start_time.clone(),
            end_time: slot.end_time.clone(),
            subject_name: subject.map(|s| s.name.clone()),
            subject_short_name: subject.map(|s| s.short_name.clone()),
            slot_type_name: slot.slot_type.name.clone(),
            room_number: slot.occupancy.room().map(|r| r.number.clone()),
            faculty_name: slot.faculty.as_ref().map(|f| f.name.clone()),
            batch_name: slot.batch.as_ref().map(|b| b.name.clone()),
            is_break: slot.is_break(),
        }
    }
}

/// Slots grouped by weekday; every day of the week is always present.
pub type WeeklySchedule = BTreeMap<DayOfWeek, Vec<ScheduleSlot>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSchedule {
    pub weekly_schedule: WeeklySchedule,
    pub today_date: NaiveDate,
    pub user_name: String,
    pub user_role: Role,
    /// Slot id to the `YYYY-MM-DD` dates that have a lecture summary.
    pub slot_summaries: BTreeMap<Uuid, Vec<String>>,
}

impl WeekPosition for ScheduleSlot {
    fn day(&self) -> DayOfWeek {
        self.day
    }

    fn start_time(&self) -> &SlotTime {
        &self.start_time
    }
}
