//! Project entity - the tracked unit of work on the dashboard.

use crate::{CoreError, CoreResult, Priority, ProjectFormData, ProjectStatus, ProjectValidator};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// An accepted project record.
///
/// Dates are kept as the strings the user entered (ISO `YYYY-MM-DD`); they are
/// interpreted on demand by [`crate::DateMetrics`]. Nothing here enforces the
/// form rules, so a record read back from storage may still violate them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub status: ProjectStatus,
    pub priority: Priority,
    /// Completion percentage, 0-100
    pub progress: i64,
    pub estimated_days: i64,
    #[serde(default)]
    pub assigned_devs: Vec<String>,
}

impl Project {
    /// Build a project from a validated form.
    ///
    /// Returns `CoreError::Validation` naming the first failing field when the
    /// form does not pass [`ProjectValidator::validate`].
    #[track_caller]
    pub fn from_form(id: String, form: ProjectFormData) -> CoreResult<Self> {
        let errors = ProjectValidator::validate(&form);
        if let Some((field, message)) = errors.iter().next() {
            return Err(CoreError::Validation {
                message: format!("{}: {}", field, message),
                field: Some(field.as_str().to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            id,
            name: form.name.trim().to_string(),
            owner: form.owner.trim().to_string(),
            description: form.description.trim().to_string(),
            start_date: form.start_date.trim().to_string(),
            end_date: form.end_date.trim().to_string(),
            status: form.status,
            priority: form.priority,
            progress: form.progress,
            estimated_days: form.estimated_days.unwrap_or_default(),
            assigned_devs: dedup_preserving_order(form.assigned_devs),
        })
    }

    /// Form pre-filled from this record, for editing
    pub fn to_form(&self) -> ProjectFormData {
        ProjectFormData {
            id: Some(self.id.clone()),
            name: self.name.clone(),
            owner: self.owner.clone(),
            description: self.description.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            status: self.status,
            priority: self.priority,
            progress: self.progress,
            estimated_days: Some(self.estimated_days),
            assigned_devs: self.assigned_devs.clone(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == ProjectStatus::Done
    }

    pub fn is_assigned_to(&self, developer_id: &str) -> bool {
        self.assigned_devs.iter().any(|id| id == developer_id)
    }
}

fn dedup_preserving_order(ids: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(ids.len());
    for id in ids {
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen
}
