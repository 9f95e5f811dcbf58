use campussync_core::models::{
    group::GroupInfo,
    preferences::{NamedItem, SlotTypePreference},
    room::RoomInfo,
    summary::LectureSummary,
    time_slot::{
        BatchRef, FacultyRef, Occupancy, RoomRef, SlotTypeRef, SubjectRef, TimeSlotRecord,
    },
    user::{FacultyInfo, Principal, UserProfile},
    week::SlotTime,
};
use chrono::{DateTime, NaiveDate, Utc};
use eyre::Result;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub availability: String,
    pub status: Option<String>,
}

impl DbUser {
    pub fn into_profile(self) -> Result<UserProfile> {
        Ok(UserProfile {
            role: self.role.parse()?,
            availability: self.availability.parse()?,
            id: self.id,
            name: self.name,
            email: self.email,
            status: self.status,
        })
    }

    pub fn into_faculty(self) -> Result<FacultyInfo> {
        Ok(FacultyInfo {
            availability: self.availability.parse()?,
            id: self.id,
            name: self.name,
            email: self.email,
            status: self.status,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbRoom {
    pub id: Uuid,
    pub number: String,
}

impl From<DbRoom> for RoomInfo {
    fn from(row: DbRoom) -> Self {
        RoomInfo {
            id: row.id,
            number: row.number,
        }
    }
}

/// A slot type or batch: anything listed by id and name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbNamed {
    pub id: Uuid,
    pub name: String,
}

impl From<DbNamed> for NamedItem {
    fn from(row: DbNamed) -> Self {
        NamedItem {
            id: row.id,
            name: row.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSlotTypePreference {
    pub slot_type_id: Uuid,
    pub enabled: bool,
}

impl From<DbSlotTypePreference> for SlotTypePreference {
    fn from(row: DbSlotTypePreference) -> Self {
        SlotTypePreference {
            slot_type_id: row.slot_type_id,
            enabled: row.enabled,
        }
    }
}

/// A time slot joined with its timetable, slot type and the optional
/// subject, room, faculty and batch.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTimeSlotRow {
    pub id: Uuid,
    pub timetable_id: Uuid,
    pub timetable_name: String,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub slot_type_id: Uuid,
    pub slot_type_name: String,
    pub subject_id: Option<Uuid>,
    pub subject_name: Option<String>,
    pub subject_short_name: Option<String>,
    pub room_id: Option<Uuid>,
    pub room_number: Option<String>,
    pub faculty_id: Option<Uuid>,
    pub faculty_name: Option<String>,
    pub batch_id: Option<Uuid>,
    pub batch_name: Option<String>,
}

impl DbTimeSlotRow {
    pub fn into_record(self) -> Result<TimeSlotRecord> {
        let subject = match (self.subject_id, self.subject_name, self.subject_short_name) {
            (Some(id), Some(name), Some(short_name)) => Some(SubjectRef {
                id,
                name,
                short_name,
            }),
            _ => None,
        };
        let room = self
            .room_id
            .zip(self.room_number)
            .map(|(id, number)| RoomRef { id, number });
        let faculty = self
            .faculty_id
            .zip(self.faculty_name)
            .map(|(id, name)| FacultyRef { id, name });
        let batch = self
            .batch_id
            .zip(self.batch_name)
            .map(|(id, name)| BatchRef { id, name });

        Ok(TimeSlotRecord {
            id: self.id,
            timetable_id: self.timetable_id,
            timetable_name: self.timetable_name,
            day: self.day.parse()?,
            start_time: SlotTime::parse(&self.start_time)?,
            end_time: SlotTime::parse(&self.end_time)?,
            slot_type: SlotTypeRef {
                id: self.slot_type_id,
                name: self.slot_type_name,
            },
            occupancy: Occupancy::classify(subject, room),
            faculty,
            batch,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSession {
    pub user_id: Uuid,
    pub role: String,
}

impl DbSession {
    pub fn into_principal(self) -> Result<Principal> {
        Ok(Principal {
            user_id: self.user_id,
            role: self.role.parse()?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSummaryDate {
    pub slot_id: Uuid,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbGroup {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub code_active: bool,
    pub created_by: Option<Uuid>,
    pub default_role: String,
}

impl DbGroup {
    pub fn into_group(self) -> Result<GroupInfo> {
        Ok(GroupInfo {
            default_role: self.default_role.parse()?,
            id: self.id,
            name: self.name,
            code: self.code,
            code_active: self.code_active,
            created_by: self.created_by,
        })
    }
}

/// A lecture summary joined with its author's name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbLectureSummary {
    pub id: Uuid,
    pub slot_id: Uuid,
    pub date: NaiveDate,
    pub content: String,
    pub notes: Option<String>,
    pub author_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbLectureSummary> for LectureSummary {
    fn from(row: DbLectureSummary) -> Self {
        LectureSummary {
            id: row.id,
            slot_id: row.slot_id,
            date: row.date,
            content: row.content,
            notes: row.notes,
            author_name: row.author_name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
