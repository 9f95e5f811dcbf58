use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::week::{DayOfWeek, SlotTime, WeekPosition};

/// Name of the slot type that marks a slot as a break regardless of its
/// subject or room.
pub const BREAK_SLOT_TYPE: &str = "Break";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotTypeRef {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectRef {
    pub id: Uuid,
    pub name: String,
    pub short_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRef {
    pub id: Uuid,
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyRef {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRef {
    pub id: Uuid,
    pub name: String,
}

/// What a slot is used for.
///
/// A slot with neither a subject nor a room is a break. [`Occupancy::classify`]
/// is the only place that decides this, so a `Session` always carries at
/// least one of the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Occupancy {
    Break,
    Session {
        subject: Option<SubjectRef>,
        room: Option<RoomRef>,
    },
}

impl Occupancy {
    pub fn classify(subject: Option<SubjectRef>, room: Option<RoomRef>) -> Self {
        match (subject, room) {
            (None, None) => Occupancy::Break,
            (subject, room) => Occupancy::Session { subject, room },
        }
    }

    pub fn subject(&self) -> Option<&SubjectRef> {
        match self {
            Occupancy::Session { subject, .. } => subject.as_ref(),
            Occupancy::Break => None,
        }
    }

    pub fn room(&self) -> Option<&RoomRef> {
        match self {
            Occupancy::Session { room, .. } => room.as_ref(),
            Occupancy::Break => None,
        }
    }
}

/// A timetable slot joined with everything the views display about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotRecord {
    pub id: Uuid,
    pub timetable_id: Uuid,
    pub timetable_name: String,
    pub day: DayOfWeek,
    pub start_time: SlotTime,
    pub end_time: SlotTime,
    pub slot_type: SlotTypeRef,
    pub occupancy: Occupancy,
    pub faculty: Option<FacultyRef>,
    pub batch: Option<BatchRef>,
}

impl TimeSlotRecord {
    /// Breaks never count as occupying anyone and never define a slot.
    pub fn is_break(&self) -> bool {
        matches!(self.occupancy, Occupancy::Break) || self.slot_type.name == BREAK_SLOT_TYPE
    }

    pub fn key(&self) -> SlotKey {
        SlotKey {
            day: self.day,
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
        }
    }

    pub fn faculty_id(&self) -> Option<Uuid> {
        self.faculty.as_ref().map(|f| f.id)
    }

    pub fn room_id(&self) -> Option<Uuid> {
        self.occupancy.room().map(|r| r.id)
    }
}

/// The (day, start, end) position of a slot in the week.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotKey {
    pub day: DayOfWeek,
    pub start_time: SlotTime,
    pub end_time: SlotTime,
}

/// A distinct recurring weekly window, derived from all timetables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotDefinition {
    pub day: DayOfWeek,
    pub start_time: SlotTime,
    pub end_time: SlotTime,
    pub slot_type_name: String,
}

impl SlotDefinition {
    pub fn key(&self) -> SlotKey {
        SlotKey {
            day: self.day,
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
        }
    }
}

impl From<&TimeSlotRecord> for SlotDefinition {
    fn from(slot: &TimeSlotRecord) -> Self {
        SlotDefinition {
            day: slot.day,
            start_time: slot.start_time.clone(),
            end_time: slot.end_time.clone(),
            slot_type_name: slot.slot_type.name.clone(),
        }
    }
}

impl WeekPosition for SlotDefinition {
    fn day(&self) -> DayOfWeek {
        self.day
    }

    fn start_time(&self) -> &SlotTime {
        &self.start_time
    }
}

impl WeekPosition for TimeSlotRecord {
    fn day(&self) -> DayOfWeek {
        self.day
    }

    fn start_time(&self) -> &SlotTime {
        &self.start_time
    }
}
