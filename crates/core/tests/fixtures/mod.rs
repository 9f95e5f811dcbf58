#![allow(dead_code)]

use async_trait::async_trait;
use campussync_core::{
    models::{
        room::RoomInfo,
        time_slot::{
            BatchRef, FacultyRef, Occupancy, RoomRef, SlotTypeRef, SubjectRef, TimeSlotRecord,
        },
        user::{AvailabilityStatus, FacultyInfo, Principal, Role},
        week::{DayOfWeek, SlotTime},
    },
    repository::AvailabilitySource,
};
use uuid::Uuid;

pub fn time(raw: &str) -> SlotTime {
    SlotTime::parse(raw).expect("valid test time")
}

pub fn principal(role: Role) -> Principal {
    Principal {
        user_id: Uuid::new_v4(),
        role,
    }
}

pub fn faculty(name: &str) -> FacultyInfo {
    FacultyInfo {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!("{}@campus.test", name.to_lowercase().replace(' ', ".")),
        availability: AvailabilityStatus::Active,
        status: None,
    }
}

pub fn room(number: &str) -> RoomInfo {
    RoomInfo {
        id: Uuid::new_v4(),
        number: number.to_string(),
    }
}

pub fn subject(short_name: &str) -> SubjectRef {
    SubjectRef {
        id: Uuid::new_v4(),
        name: format!("{} (full)", short_name),
        short_name: short_name.to_string(),
    }
}

/// A teaching slot (it has a subject) with no faculty, room or batch.
pub fn slot(day: DayOfWeek, start: &str, end: &str, slot_type: &str) -> TimeSlotRecord {
    TimeSlotRecord {
        id: Uuid::new_v4(),
        timetable_id: Uuid::nil(),
        timetable_name: "CS Year 2".to_string(),
        day,
        start_time: time(start),
        end_time: time(end),
        slot_type: SlotTypeRef {
            id: Uuid::new_v4(),
            name: slot_type.to_string(),
        },
        occupancy: Occupancy::classify(Some(subject("DSA")), None),
        faculty: None,
        batch: None,
    }
}

pub trait SlotExt {
    fn taught_by(self, faculty: &FacultyInfo) -> Self;
    fn in_room(self, room: &RoomInfo) -> Self;
    fn for_batch(self, id: Uuid, name: &str) -> Self;
    fn of_type(self, slot_type: &SlotTypeRef) -> Self;
    fn without_subject_or_room(self) -> Self;
    fn in_timetable(self, id: Uuid, name: &str) -> Self;
}

impl SlotExt for TimeSlotRecord {
    fn taught_by(mut self, faculty: &FacultyInfo) -> Self {
        self.faculty = Some(FacultyRef {
            id: faculty.id,
            name: faculty.name.clone(),
        });
        self
    }

    fn in_room(mut self, room: &RoomInfo) -> Self {
        let subject = self.occupancy.subject().cloned();
        self.occupancy = Occupancy::classify(
            subject,
            Some(RoomRef {
                id: room.id,
                number: room.number.clone(),
            }),
        );
        self
    }

    fn for_batch(mut self, id: Uuid, name: &str) -> Self {
        self.batch = Some(BatchRef {
            id,
            name: name.to_string(),
        });
        self
    }

    fn of_type(mut self, slot_type: &SlotTypeRef) -> Self {
        self.slot_type = slot_type.clone();
        self
    }

    fn without_subject_or_room(mut self) -> Self {
        self.occupancy = Occupancy::classify(None, None);
        self
    }

    fn in_timetable(mut self, id: Uuid, name: &str) -> Self {
        self.timetable_id = id;
        self.timetable_name = name.to_string();
        self
    }
}

/// A fixed snapshot standing in for the database.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    pub faculty: Vec<FacultyInfo>,
    pub rooms: Vec<RoomInfo>,
    pub slots: Vec<TimeSlotRecord>,
}

#[async_trait]
impl AvailabilitySource for InMemorySource {
    async fn list_faculty(&self) -> eyre::Result<Vec<FacultyInfo>> {
        let mut faculty = self.faculty.clone();
        faculty.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(faculty)
    }

    async fn list_rooms(&self) -> eyre::Result<Vec<RoomInfo>> {
        let mut rooms = self.rooms.clone();
        rooms.sort_by(|a, b| a.number.cmp(&b.number));
        Ok(rooms)
    }

    async fn list_time_slots(&self) -> eyre::Result<Vec<TimeSlotRecord>> {
        Ok(self.slots.clone())
    }
}
