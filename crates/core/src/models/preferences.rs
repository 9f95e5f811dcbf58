use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The schedule filters in force for a student.
///
/// `None` means the filter is not active: every slot type is enabled, or
/// every batch is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivePreferences {
    pub enabled_slot_type_ids: Option<HashSet<Uuid>>,
    pub selected_batch_ids: Option<HashSet<Uuid>>,
}

/// A stored slot-type preference row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotTypePreference {
    pub slot_type_id: Uuid,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedItem {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotTypeWithPreference {
    pub id: Uuid,
    pub name: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchWithPreference {
    pub id: Uuid,
    pub name: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPreferences {
    pub slot_types: Vec<SlotTypeWithPreference>,
    pub batches: Vec<BatchWithPreference>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSlotTypePreferenceRequest {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBatchPreferencesRequest {
    #[serde(default)]
    pub batch_ids: Vec<Uuid>,
}
