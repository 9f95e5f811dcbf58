//! Persistence boundaries the engines read and write through.
//!
//! The engines never talk to a database directly. Each trait here is the
//! smallest set of queries one engine needs; `campussync-db` implements them
//! against PostgreSQL and provides mocks for tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;
use uuid::Uuid;

use crate::models::{
    group::{GroupInfo, GroupRole},
    preferences::{NamedItem, SlotTypePreference},
    room::RoomInfo,
    summary::{LectureSummary, SummaryDraft},
    time_slot::TimeSlotRecord,
    user::{AvailabilityStatus, FacultyInfo, Principal, UserProfile},
};

#[async_trait]
pub trait AvailabilitySource: Send + Sync {
    /// Every Faculty and HOD user, sorted by name.
    async fn list_faculty(&self) -> Result<Vec<FacultyInfo>>;

    /// Every room, sorted by number.
    async fn list_rooms(&self) -> Result<Vec<RoomInfo>>;

    /// Every slot of every timetable with its display joins. Slots typed
    /// "Break" may be left out by the implementation.
    async fn list_time_slots(&self) -> Result<Vec<TimeSlotRecord>>;
}

#[async_trait]
pub trait ScheduleSource: Send + Sync {
    async fn get_user(&self, user_id: Uuid) -> Result<Option<UserProfile>>;

    /// Slots of every timetable assigned to a group the user belongs to, in
    /// no particular week order. A slot reachable through more than one group
    /// may be returned more than once.
    async fn slots_for_member(&self, user_id: Uuid) -> Result<Vec<TimeSlotRecord>>;

    /// `(slot id, date)` of every lecture summary for the given slots within
    /// the inclusive date range.
    async fn summary_dates(
        &self,
        slot_ids: &[Uuid],
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<(Uuid, NaiveDate)>>;
}

#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Every slot type, sorted by name.
    async fn list_slot_types(&self) -> Result<Vec<NamedItem>>;

    /// Every batch, sorted by name.
    async fn list_batches(&self) -> Result<Vec<NamedItem>>;

    async fn slot_type_preferences(&self, user_id: Uuid) -> Result<Vec<SlotTypePreference>>;

    async fn batch_preferences(&self, user_id: Uuid) -> Result<Vec<Uuid>>;

    async fn upsert_slot_type_preference(
        &self,
        user_id: Uuid,
        slot_type_id: Uuid,
        enabled: bool,
    ) -> Result<()>;

    /// Replaces the user's whole batch selection.
    async fn replace_batch_preferences(&self, user_id: Uuid, batch_ids: &[Uuid]) -> Result<()>;
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn update_availability(&self, user_id: Uuid, availability: AvailabilityStatus)
    -> Result<()>;

    /// `None` clears the message.
    async fn update_status(&self, user_id: Uuid, status: Option<String>) -> Result<()>;
}

#[async_trait]
pub trait GroupStore: Send + Sync {
    /// Exact match on the stored (upper case) join code.
    async fn find_group_by_code(&self, code: &str) -> Result<Option<GroupInfo>>;

    /// Returns `false` when the user was already a member.
    async fn add_member(&self, group_id: Uuid, user_id: Uuid, role: GroupRole) -> Result<bool>;
}

#[async_trait]
pub trait SummaryStore: Send + Sync {
    async fn get_slot(&self, slot_id: Uuid) -> Result<Option<TimeSlotRecord>>;

    async fn get_summary(&self, slot_id: Uuid, date: NaiveDate) -> Result<Option<LectureSummary>>;

    /// Creates the summary for `(slot_id, date)` or replaces its content and
    /// notes. The original author is kept on replace.
    async fn upsert_summary(&self, draft: SummaryDraft) -> Result<LectureSummary>;
}

/// The identity provider: turns an opaque session token into a caller.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn resolve_session(&self, token: &str) -> Result<Option<Principal>>;
}
