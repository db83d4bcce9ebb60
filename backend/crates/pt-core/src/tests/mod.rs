mod models;
mod project_validator;
mod views;

use crate::{Priority, Project, ProjectFormData, ProjectStatus};

/// A form that passes every rule
pub(crate) fn valid_form() -> ProjectFormData {
    ProjectFormData {
        name: "Valid Name".to_string(),
        owner: "Owner".to_string(),
        description: "A sufficiently long description.".to_string(),
        start_date: "2025-01-01".to_string(),
        end_date: "2025-02-01".to_string(),
        progress: 50,
        estimated_days: Some(5),
        ..ProjectFormData::default()
    }
}

pub(crate) fn project(id: &str, status: ProjectStatus, start: &str, end: &str, devs: &[&str]) -> Project {
    Project {
        id: id.to_string(),
        name: format!("Project {id}"),
        owner: "Owner".to_string(),
        description: "Description for tests".to_string(),
        start_date: start.to_string(),
        end_date: end.to_string(),
        status,
        priority: Priority::Medium,
        progress: 0,
        estimated_days: 5,
        assigned_devs: devs.iter().map(|d| d.to_string()).collect(),
    }
}
