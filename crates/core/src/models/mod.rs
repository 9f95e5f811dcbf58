pub mod availability;
pub mod group;
pub mod preferences;
pub mod profile;
pub mod room;
pub mod schedule;
pub mod summary;
pub mod time_slot;
pub mod user;
pub mod week;
