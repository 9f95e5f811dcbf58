//! Weekly calendar primitives shared by every timetable.
//!
//! Slots recur weekly, so a slot position is only a [`DayOfWeek`] plus a pair
//! of [`SlotTime`] values. Both types order themselves the way the views
//! present them: Monday first, and earlier times first.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::errors::CampusError;

/// Day of the week in fixed Monday-first order.
///
/// The derived `Ord` follows declaration order, which is the order every
/// availability and schedule view is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Position in the week, Monday = 0 through Sunday = 6.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }

    /// The weekday a calendar date falls on.
    pub fn of_date(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayOfWeek::ALL
            .into_iter()
            .find(|day| day.as_str() == s)
            .ok_or_else(|| CampusError::Validation(format!("Unknown day of week: {}", s)))
    }
}

/// A wall-clock time stored as zero-padded 24-hour `HH:MM`.
///
/// Comparisons are plain string comparisons, which only agree with
/// chronological order because the value is always zero-padded. Every
/// constructor goes through [`SlotTime::parse`] to keep it that way.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlotTime(String);

impl SlotTime {
    /// Parses `HH:MM` or `H:MM` and normalizes to `HH:MM`.
    pub fn parse(raw: &str) -> Result<Self, CampusError> {
        let trimmed = raw.trim();
        let (hours, minutes) = trimmed
            .split_once(':')
            .ok_or_else(|| CampusError::Validation(format!("Invalid time '{}', expected HH:MM", raw)))?;

        // chrono accepts a single hour digit; the minute field must be exact.
        if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
            return Err(CampusError::Validation(format!(
                "Invalid time '{}', expected HH:MM",
                raw
            )));
        }

        let time = NaiveTime::parse_from_str(trimmed, "%H:%M").map_err(|e| {
            CampusError::Validation(format!("Invalid time '{}': {}", raw, e))
        })?;

        Ok(SlotTime(time.format("%H:%M").to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SlotTime {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SlotTime::parse(s)
    }
}

impl TryFrom<String> for SlotTime {
    type Error = CampusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SlotTime::parse(&value)
    }
}

impl From<SlotTime> for String {
    fn from(value: SlotTime) -> Self {
        value.0
    }
}

/// Anything placed at a day and start time within the week.
pub trait WeekPosition {
    fn day(&self) -> DayOfWeek;
    fn start_time(&self) -> &SlotTime;
}

/// Sorts by weekday (Monday first), then by start time. The sort is stable,
/// so entries sharing a position keep their input order.
pub fn sort_by_week_position<T: WeekPosition>(items: &mut [T]) {
    items.sort_by(|a, b| {
        a.day()
            .cmp(&b.day())
            .then_with(|| a.start_time().cmp(b.start_time()))
    });
}
