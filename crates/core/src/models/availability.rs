use serde::{Deserialize, Serialize};

use super::{
    room::RoomInfo,
    time_slot::{SlotDefinition, TimeSlotRecord},
    user::FacultyInfo,
    week::{DayOfWeek, SlotTime, WeekPosition},
};

/// One row of an entity's occupied or free list.
///
/// Free rows are synthesized from a [`SlotDefinition`] and carry an id of the
/// form `free-{day}-{start}` with every display field empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotInfo {
    pub id: String,
    pub day: DayOfWeek,
    pub start_time: SlotTime,
    pub end_time: SlotTime,
    pub slot_type_name: String,
    pub timetable_name: String,
    pub room_number: Option<String>,
    pub subject_short_name: Option<String>,
    pub subject_name: Option<String>,
    pub batch_name: Option<String>,
}

impl SlotInfo {
    pub fn occupied(slot: &TimeSlotRecord) -> Self {
        let subject = slot.occupancy.subject();
        SlotInfo {
            id: slot.id.to_string(),
            day: slot.day,
            start_time: slot.start_time.clone(),
            end_time: slot.end_time.clone(),
            slot_type_name: slot.slot_type.name.clone(),
            timetable_name: slot.timetable_name.clone(),
            room_number: slot.occupancy.room().map(|r| r.number.clone()),
            subject_short_name: subject.map(|s| s.short_name.clone()),
            subject_name: subject.map(|s| s.name.clone()),
            batch_name: slot.batch.as_ref().map(|b| b.name.clone()),
        }
    }

    pub fn free(definition: &SlotDefinition) -> Self {
        SlotInfo {
            id: format!("free-{}-{}", definition.day, definition.start_time),
            day: definition.day,
            start_time: definition.start_time.clone(),
            end_time: definition.end_time.clone(),
            slot_type_name: definition.slot_type_name.clone(),
            timetable_name: String::new(),
            room_number: None,
            subject_short_name: None,
            subject_name: None,
            batch_name: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyWithSlots {
    #[serde(flatten)]
    pub faculty: FacultyInfo,
    pub occupied_slots: Vec<SlotInfo>,
    pub free_slots: Vec<SlotInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomWithSlots {
    #[serde(flatten)]
    pub room: RoomInfo,
    pub occupied_slots: Vec<SlotInfo>,
    pub free_slots: Vec<SlotInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotWithFreeFaculty {
    pub day: DayOfWeek,
    pub start_time: SlotTime,
    pub end_time: SlotTime,
    pub slot_type_name: String,
    pub free_faculty: Vec<FacultyInfo>,
    pub busy_faculty: Vec<FacultyInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotWithFreeRooms {
    pub day: DayOfWeek,
    pub start_time: SlotTime,
    pub end_time: SlotTime,
    pub slot_type_name: String,
    pub free_rooms: Vec<RoomInfo>,
    pub occupied_rooms: Vec<RoomInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyAvailability {
    pub faculty_wise: Vec<FacultyWithSlots>,
    pub slot_wise: Vec<SlotWithFreeFaculty>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAvailability {
    pub room_wise: Vec<RoomWithSlots>,
    pub slot_wise: Vec<SlotWithFreeRooms>,
}

impl WeekPosition for SlotInfo {
    fn day(&self) -> DayOfWeek {
        self.day
    }

    fn start_time(&self) -> &SlotTime {
        &self.start_time
    }
}
