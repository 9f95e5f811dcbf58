pub mod availability;
pub mod groups;
pub mod health;
pub mod preferences;
pub mod profile;
pub mod schedule;
pub mod summaries;
