use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CampusError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "HOD")]
    Hod,
    Faculty,
    Student,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Hod => "HOD",
            Role::Faculty => "Faculty",
            Role::Student => "Student",
        }
    }

    /// HOD and Faculty both teach and therefore own timetable slots.
    pub fn is_teaching(self) -> bool {
        matches!(self, Role::Hod | Role::Faculty)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HOD" => Ok(Role::Hod),
            "Faculty" => Ok(Role::Faculty),
            "Student" => Ok(Role::Student),
            other => Err(CampusError::Validation(format!("Unknown role: {}", other))),
        }
    }
}

/// The resolved caller of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub user_id: Uuid,
    pub role: Role,
}

/// Self-reported presence of a faculty member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AvailabilityStatus {
    Active,
    Away,
    Busy,
}

impl AvailabilityStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AvailabilityStatus::Active => "Active",
            AvailabilityStatus::Away => "Away",
            AvailabilityStatus::Busy => "Busy",
        }
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AvailabilityStatus {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(AvailabilityStatus::Active),
            "Away" => Ok(AvailabilityStatus::Away),
            "Busy" => Ok(AvailabilityStatus::Busy),
            other => Err(CampusError::Validation(format!(
                "Unknown availability status: {}",
                other
            ))),
        }
    }
}

/// A faculty or HOD user as shown in availability views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyInfo {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub availability: AvailabilityStatus,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub availability: AvailabilityStatus,
    pub status: Option<String>,
}
