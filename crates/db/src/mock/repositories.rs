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
use mockall::mock;
use uuid::Uuid;

// Mock repositories for testing
mock! {
    pub AvailabilityRepo {}

    #[async_trait]
    impl AvailabilitySource for AvailabilityRepo {
        async fn list_faculty(&self) -> eyre::Result<Vec<FacultyInfo>>;
        async fn list_rooms(&self) -> eyre::Result<Vec<RoomInfo>>;
        async fn list_time_slots(&self) -> eyre::Result<Vec<TimeSlotRecord>>;
    }
}

mock! {
    pub ScheduleRepo {}

    #[async_trait]
    impl ScheduleSource for ScheduleRepo {
        async fn get_user(&self, user_id: Uuid) -> eyre::Result<Option<UserProfile>>;

        async fn slots_for_member(&self, user_id: Uuid) -> eyre::Result<Vec<TimeSlotRecord>>;

        async fn summary_dates(
            &self,
            slot_ids: &[Uuid],
            from: NaiveDate,
            to: NaiveDate,
        ) -> eyre::Result<Vec<(Uuid, NaiveDate)>>;
    }
}

mock! {
    pub PreferenceRepo {}

    #[async_trait]
    impl PreferenceStore for PreferenceRepo {
        async fn list_slot_types(&self) -> eyre::Result<Vec<NamedItem>>;

        async fn list_batches(&self) -> eyre::Result<Vec<NamedItem>>;

        async fn slot_type_preferences(
            &self,
            user_id: Uuid,
        ) -> eyre::Result<Vec<SlotTypePreference>>;

        async fn batch_preferences(&self, user_id: Uuid) -> eyre::Result<Vec<Uuid>>;

        async fn upsert_slot_type_preference(
            &self,
            user_id: Uuid,
            slot_type_id: Uuid,
            enabled: bool,
        ) -> eyre::Result<()>;

        async fn replace_batch_preferences(
            &self,
            user_id: Uuid,
            batch_ids: &[Uuid],
        ) -> eyre::Result<()>;
    }
}

mock! {
    pub ProfileRepo {}

    #[async_trait]
    impl ProfileStore for ProfileRepo {
        async fn update_availability(
            &self,
            user_id: Uuid,
            availability: AvailabilityStatus,
        ) -> eyre::Result<()>;

        async fn update_status(&self, user_id: Uuid, status: Option<String>) -> eyre::Result<()>;
    }
}

mock! {
    pub GroupRepo {}

    #[async_trait]
    impl GroupStore for GroupRepo {
        async fn find_group_by_code(&self, code: &str) -> eyre::Result<Option<GroupInfo>>;

        async fn add_member(
            &self,
            group_id: Uuid,
            user_id: Uuid,
            role: GroupRole,
        ) -> eyre::Result<bool>;
    }
}

mock! {
    pub SummaryRepo {}

    #[async_trait]
    impl SummaryStore for SummaryRepo {
        async fn get_slot(&self, slot_id: Uuid) -> eyre::Result<Option<TimeSlotRecord>>;

        async fn get_summary(
            &self,
            slot_id: Uuid,
            date: NaiveDate,
        ) -> eyre::Result<Option<LectureSummary>>;

        async fn upsert_summary(&self, draft: SummaryDraft) -> eyre::Result<LectureSummary>;
    }
}

mock! {
    pub SessionRepo {}

    #[async_trait]
    impl SessionStore for SessionRepo {
        async fn resolve_session(&self, token: &str) -> eyre::Result<Option<Principal>>;
    }
}
