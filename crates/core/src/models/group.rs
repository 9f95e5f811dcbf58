use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CampusError;

/// What a member may do inside a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupRole {
    Editor,
    Viewer,
}

impl GroupRole {
    pub fn as_str(self) -> &'static str {
        match self {
            GroupRole::Editor => "Editor",
            GroupRole::Viewer => "Viewer",
        }
    }
}

impl fmt::Display for GroupRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupRole {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Editor" => Ok(GroupRole::Editor),
            "Viewer" => Ok(GroupRole::Viewer),
            other => Err(CampusError::Validation(format!(
                "Unknown group role: {}",
                other
            ))),
        }
    }
}

/// A group as seen by someone holding its join code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupInfo {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub code_active: bool,
    pub created_by: Option<Uuid>,
    pub default_role: GroupRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinGroupRequest {
    pub code: String,
}

/// The membership created by joining a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMembership {
    pub group_id: Uuid,
    pub group_name: String,
    pub role: GroupRole,
}
