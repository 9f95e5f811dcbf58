#![allow(dead_code)]

use std::sync::Arc;

use axum::http::{HeaderValue, header::AUTHORIZATION};
use axum_test::{TestRequest, TestServer};
use campussync_api::{ApiState, build_router};
use campussync_core::models::{
    room::RoomInfo,
    time_slot::{FacultyRef, Occupancy, RoomRef, SlotTypeRef, SubjectRef, TimeSlotRecord},
    user::{AvailabilityStatus, FacultyInfo, Principal, Role},
    week::{DayOfWeek, SlotTime},
};
use campussync_db::mock::{
    MockAvailabilityRepo, MockGroupRepo, MockPreferenceRepo, MockProfileRepo, MockScheduleRepo,
    MockSessionRepo, MockSummaryRepo,
};
use uuid::Uuid;

pub const TOKEN: &str = "test-session-token";

pub struct TestContext {
    pub availability: MockAvailabilityRepo,
    pub schedules: MockScheduleRepo,
    pub preferences: MockPreferenceRepo,
    pub profiles: MockProfileRepo,
    pub groups: MockGroupRepo,
    pub summaries: MockSummaryRepo,
    pub sessions: MockSessionRepo,
}

impl TestContext {
    /// Every mock starts without expectations; any unexpected call panics.
    /// Session lookups answer `None` until [`TestContext::sign_in`].
    pub fn new() -> Self {
        let mut sessions = MockSessionRepo::new();
        sessions.expect_resolve_session().returning(|_| Ok(None));

        Self {
            availability: MockAvailabilityRepo::new(),
            schedules: MockScheduleRepo::new(),
            preferences: MockPreferenceRepo::new(),
            profiles: MockProfileRepo::new(),
            groups: MockGroupRepo::new(),
            summaries: MockSummaryRepo::new(),
            sessions,
        }
    }

    /// Makes [`TOKEN`] resolve to a fresh principal with `role`.
    pub fn sign_in(&mut self, role: Role) -> Principal {
        let principal = Principal {
            user_id: Uuid::new_v4(),
            role,
        };

        let resolved = principal.clone();
        self.sessions.checkpoint();
        self.sessions
            .expect_resolve_session()
            .returning(move |token| Ok((token == TOKEN).then(|| resolved.clone())));

        principal
    }

    pub fn into_server(self) -> TestServer {
        let state = ApiState {
            availability: Arc::new(self.availability),
            schedules: Arc::new(self.schedules),
            preferences: Arc::new(self.preferences),
            profiles: Arc::new(self.profiles),
            groups: Arc::new(self.groups),
            summaries: Arc::new(self.summaries),
            sessions: Arc::new(self.sessions),
        };

        TestServer::new(build_router(Arc::new(state))).expect("Failed to start test server")
    }
}

pub fn authorized(request: TestRequest) -> TestRequest {
    request.add_header(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", TOKEN)).unwrap(),
    )
}

pub fn faculty(name: &str) -> FacultyInfo {
    FacultyInfo {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!("{}@campus.test", name.to_lowercase()),
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

/// A lecture taught by `lecturer`, optionally in `room`.
pub fn lecture(
    day: DayOfWeek,
    start: &str,
    end: &str,
    lecturer: &FacultyInfo,
    room: Option<&RoomInfo>,
) -> TimeSlotRecord {
    TimeSlotRecord {
        id: Uuid::new_v4(),
        timetable_id: Uuid::new_v4(),
        timetable_name: "CS Year 2".to_string(),
        day,
        start_time: SlotTime::parse(start).unwrap(),
        end_time: SlotTime::parse(end).unwrap(),
        slot_type: SlotTypeRef {
            id: Uuid::new_v4(),
            name: "Lecture".to_string(),
        },
        occupancy: Occupancy::classify(
            Some(SubjectRef {
                id: Uuid::new_v4(),
                name: "Operating Systems".to_string(),
                short_name: "OS".to_string(),
            }),
            room.map(|r| RoomRef {
                id: r.id,
                number: r.number.clone(),
            }),
        ),
        faculty: Some(FacultyRef {
            id: lecturer.id,
            name: lecturer.name.clone(),
        }),
        batch: None,
    }
}
