use crate::{OWNERS, Priority, ProjectStatus};

use serde::{Deserialize, Serialize};

/// Candidate project as submitted by the edit form.
///
/// Shape matches [`crate::Project`] except the id is optional and the
/// estimated day count may be missing altogether.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectFormData {
    pub id: Option<String>,
    pub name: String,
    pub owner: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub progress: i64,
    pub estimated_days: Option<i64>,
    pub assigned_devs: Vec<String>,
}

impl Default for ProjectFormData {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            owner: OWNERS[0].to_string(),
            description: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            status: ProjectStatus::default(),
            priority: Priority::default(),
            progress: 0,
            estimated_days: Some(0),
            assigned_devs: Vec::new(),
        }
    }
}
