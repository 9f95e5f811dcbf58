pub mod repositories;

pub use repositories::{
    MockAvailabilityRepo, MockGroupRepo, MockPreferenceRepo, MockProfileRepo, MockScheduleRepo,
    MockSessionRepo, MockSummaryRepo,
};
