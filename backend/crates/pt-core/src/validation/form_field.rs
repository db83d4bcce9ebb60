use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Project form fields that carry validation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Name,
    Owner,
    Description,
    StartDate,
    EndDate,
    Progress,
    EstimatedDays,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        Self::Name,
        Self::Owner,
        Self::Description,
        Self::StartDate,
        Self::EndDate,
        Self::Progress,
        Self::EstimatedDays,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Owner => "owner",
            Self::Description => "description",
            Self::StartDate => "startDate",
            Self::EndDate => "endDate",
            Self::Progress => "progress",
            Self::EstimatedDays => "estimatedDays",
        }
    }
}

impl FromStr for FormField {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| CoreError::InvalidFormField {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
