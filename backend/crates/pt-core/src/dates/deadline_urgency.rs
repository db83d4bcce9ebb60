use serde::{Deserialize, Serialize};

/// More than this many working days left counts as on track
pub const ON_TRACK_THRESHOLD_DAYS: i64 = 10;

/// How close a project is to its deadline, from remaining working days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineUrgency {
    OnTrack,
    Approaching,
    Overdue,
}

impl DeadlineUrgency {
    pub fn from_remaining(remaining_working_days: i64) -> Self {
        if remaining_working_days > ON_TRACK_THRESHOLD_DAYS {
            Self::OnTrack
        } else if remaining_working_days > 0 {
            Self::Approaching
        } else {
            Self::Overdue
        }
    }
}

/// Bucket used to colour progress bars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressBand {
    Low,
    Medium,
    High,
}

impl ProgressBand {
    pub fn from_progress(progress: i64) -> Self {
        match progress {
            p if p < 30 => Self::Low,
            p if p < 70 => Self::Medium,
            _ => Self::High,
        }
    }
}
