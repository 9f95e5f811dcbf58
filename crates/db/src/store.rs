use async_trait::async_trait;
use campussync_core::{
    models::{
        group::{GroupInfo, GroupRole},
        preferences::{NamedItem, SlotTypePreference},
        room::RoomInfo,
        summary::{LectureSummary, SummaryDraft},
        time_slot::TimeSlotRecord,
        user::{AvailabilityStatus, FacultyInfo, Principal, UserProfile},
    },
    repository::{
        AvailabilitySource, GroupStore, PreferenceStore, ProfileStore, ScheduleSource,
        SessionStore, SummaryStore,
    },
};
use chrono::NaiveDate;
use eyre::Result;
use uuid::Uuid;

use crate::{
    DbPool,
    repositories::{
        availability, groups, preferences, profile, schedule, session, summaries, time_slot,
    },
};

/// PostgreSQL-backed implementation of every persistence boundary.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl AvailabilitySource for PgStore {
    async fn list_faculty(&self) -> Result<Vec<FacultyInfo>> {
        availability::get_all_faculty(&self.pool).await
    }

    async fn list_rooms(&self) -> Result<Vec<RoomInfo>> {
        availability::get_all_rooms(&self.pool).await
    }

    async fn list_time_slots(&self) -> Result<Vec<TimeSlotRecord>> {
        time_slot::get_all_time_slots(&self.pool).await
    }
}

#[async_trait]
impl ScheduleSource for PgStore {
    async fn get_user(&self, user_id: Uuid) -> Result<Option<UserProfile>> {
        schedule::get_user_by_id(&self.pool, user_id).await
    }

    async fn slots_for_member(&self, user_id: Uuid) -> Result<Vec<TimeSlotRecord>> {
        time_slot::get_time_slots_for_member(&self.pool, user_id).await
    }

    async fn summary_dates(
        &self,
        slot_ids: &[Uuid],
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<(Uuid, NaiveDate)>> {
        schedule::get_summary_dates(&self.pool, slot_ids, from, to).await
    }
}

#[async_trait]
impl PreferenceStore for PgStore {
    async fn list_slot_types(&self) -> Result<Vec<NamedItem>> {
        preferences::get_all_slot_types(&self.pool).await
    }

    async fn list_batches(&self) -> Result<Vec<NamedItem>> {
        preferences::get_all_batches(&self.pool).await
    }

    async fn slot_type_preferences(&self, user_id: Uuid) -> Result<Vec<SlotTypePreference>> {
        preferences::get_slot_type_preferences(&self.pool, user_id).await
    }

    async fn batch_preferences(&self, user_id: Uuid) -> Result<Vec<Uuid>> {
        preferences::get_batch_preferences(&self.pool, user_id).await
    }

    async fn upsert_slot_type_preference(
        &self,
        user_id: Uuid,
        slot_type_id: Uuid,
        enabled: bool,
    ) -> Result<()> {
        preferences::upsert_slot_type_preference(&self.pool, user_id, slot_type_id, enabled).await
    }

    async fn replace_batch_preferences(&self, user_id: Uuid, batch_ids: &[Uuid]) -> Result<()> {
        preferences::replace_batch_preferences(&self.pool, user_id, batch_ids).await
    }
}

#[async_trait]
impl ProfileStore for PgStore {
    async fn update_availability(
        &self,
        user_id: Uuid,
        availability: AvailabilityStatus,
    ) -> Result<()> {
        profile::update_availability(&self.pool, user_id, availability).await
    }

    async fn update_status(&self, user_id: Uuid, status: Option<String>) -> Result<()> {
        profile::update_status(&self.pool, user_id, status.as_deref()).await
    }
}

#[async_trait]
impl GroupStore for PgStore {
    async fn find_group_by_code(&self, code: &str) -> Result<Option<GroupInfo>> {
        groups::get_group_by_code(&self.pool, code).await
    }

    async fn add_member(&self, group_id: Uuid, user_id: Uuid, role: GroupRole) -> Result<bool> {
        groups::add_group_member(&self.pool, group_id, user_id, role).await
    }
}

#[async_trait]
impl SummaryStore for PgStore {
    async fn get_slot(&self, slot_id: Uuid) -> Result<Option<TimeSlotRecord>> {
        time_slot::get_time_slot_by_id(&self.pool, slot_id).await
    }

    async fn get_summary(&self, slot_id: Uuid, date: NaiveDate) -> Result<Option<LectureSummary>> {
        summaries::get_summary(&self.pool, slot_id, date).await
    }

    async fn upsert_summary(&self, draft: SummaryDraft) -> Result<LectureSummary> {
        summaries::upsert_summary(&self.pool, &draft).await
    }
}

#[async_trait]
impl SessionStore for PgStore {
    async fn resolve_session(&self, token: &str) -> Result<Option<Principal>> {
        session::get_principal_by_token(&self.pool, token).await
    }
}
