
use crate::{ProjectPatch, Tracker, TrackerSettings};

use pt_storage::{MemoryBackend, Storage};

use chrono::NaiveDate;

/// Wednesday 15 January 2025
pub(crate) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

pub(crate) fn tracker() -> Tracker<MemoryBackend> {
    Tracker::new(Storage::new(MemoryBackend::new()), TrackerSettings::default()).with_today(today())
}

/// Passes validation: 6-31 January 2025
pub(crate) fn valid_patch() -> ProjectPatch {
    ProjectPatch {
        name: Some("Website redesign".to_string()),
        description: Some("Refresh the public marketing site".to_string()),
        start_date: Some("2025-01-06".to_string()),
        end_date: Some("2025-01-31".to_string()),
        estimated_days: Some(15),
        ..ProjectPatch::default()
    }
}

pub(crate) fn created_id(value: &serde_json::Value) -> String {
    value["project"]["id"].as_str().unwrap().to_string()
}
