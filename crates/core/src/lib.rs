//! # CampusSync Core
//!
//! Domain types, the error taxonomy, and the read-side engines of the
//! CampusSync timetable service:
//!
//! - [`availability`]: free/busy derivation for faculty and rooms
//! - [`schedule`]: a user's personal weekly schedule
//! - [`preferences`]: student schedule filters
//! - [`profile`]: self-reported availability and status
//! - [`groups`]: joining a group by its code
//! - [`summaries`]: lecture summary notes per slot and date
//!
//! Engines take the resolved caller as an explicit `Option<&Principal>` and
//! reach storage only through the traits in [`repository`].

pub mod access;
pub mod availability;
pub mod errors;
pub mod groups;
pub mod models;
pub mod preferences;
pub mod profile;
pub mod repository;
pub mod schedule;
pub mod summaries;
