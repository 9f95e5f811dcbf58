use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::schedule::ScheduleSlot;

/// The note a lecturer leaves on one occurrence of a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LectureSummary {
    pub id: Uuid,
    pub slot_id: Uuid,
    pub date: NaiveDate,
    pub content: String,
    pub notes: Option<String>,
    pub author_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A summary together with the slot it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LectureSummaryView {
    #[serde(flatten)]
    pub summary: LectureSummary,
    pub slot: ScheduleSlot,
}

/// What gets written when a summary is created or replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryDraft {
    pub slot_id: Uuid,
    pub date: NaiveDate,
    pub content: String,
    pub notes: Option<String>,
    pub author_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSummaryRequest {
    pub content: String,
    #[serde(default)]
    pub notes: Option<String>,
}
