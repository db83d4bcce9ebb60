use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Project workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    /// Not started yet
    #[default]
    ToDo,
    InProgress,
    Done,
    /// Waiting on an external party
    Waiting,
    Blocked,
    Postponed,
    /// Deadline or scope exception granted
    Waived,
    Delayed,
}

impl ProjectStatus {
    /// Every status, in display order
    pub const ALL: [ProjectStatus; 8] = [
        Self::ToDo,
        Self::InProgress,
        Self::Done,
        Self::Waiting,
        Self::Blocked,
        Self::Postponed,
        Self::Waived,
        Self::Delayed,
    ];

    /// Convert to stored string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToDo => "to-do",
            Self::InProgress => "in-progress",
            Self::Done => "done",
            Self::Waiting => "waiting",
            Self::Blocked => "blocked",
            Self::Postponed => "postponed",
            Self::Waived => "waived",
            Self::Delayed => "delayed",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::ToDo => "To do",
            Self::InProgress => "In progress",
            Self::Done => "Done",
            Self::Waiting => "Waiting",
            Self::Blocked => "Blocked",
            Self::Postponed => "Postponed",
            Self::Waived => "Waived",
            Self::Delayed => "Delayed",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "to-do" => Ok(Self::ToDo),
            "in-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            "waiting" => Ok(Self::Waiting),
            "blocked" => Ok(Self::Blocked),
            "postponed" => Ok(Self::Postponed),
            "waived" => Ok(Self::Waived),
            "delayed" => Ok(Self::Delayed),
            _ => Err(CoreError::InvalidProjectStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
