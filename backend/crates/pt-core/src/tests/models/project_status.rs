use crate::{DeveloperRole, Priority, ProjectStatus, Seniority};

use std::str::FromStr;

#[test]
fn test_project_status_as_str() {
    assert_eq!(ProjectStatus::ToDo.as_str(), "to-do");
    assert_eq!(ProjectStatus::InProgress.as_str(), "in-progress");
    assert_eq!(ProjectStatus::Waived.as_str(), "waived");
}

#[test]
fn test_project_status_from_str_round_trips_every_status() {
    for status in ProjectStatus::ALL {
        assert_eq!(ProjectStatus::from_str(status.as_str()).unwrap(), status);
    }
    assert!(ProjectStatus::from_str("in_progress").is_err());
    assert!(ProjectStatus::from_str("archived").is_err());
}

#[test]
fn test_project_status_serde_uses_wire_names() {
    let json = serde_json::to_string(&ProjectStatus::InProgress).unwrap();
    assert_eq!(json, "\"in-progress\"");

    let parsed: ProjectStatus = serde_json::from_str("\"to-do\"").unwrap();
    assert_eq!(parsed, ProjectStatus::ToDo);
}

#[test]
fn test_project_status_default() {
    assert_eq!(ProjectStatus::default(), ProjectStatus::ToDo);
}

#[test]
fn test_priority_and_people_enums_from_str() {
    assert_eq!(Priority::from_str("critical").unwrap(), Priority::Critical);
    assert!(Priority::from_str("urgent").is_err());
    assert_eq!(Priority::default(), Priority::Medium);

    assert_eq!(DeveloperRole::from_str("fullstack").unwrap(), DeveloperRole::Fullstack);
    assert!(DeveloperRole::from_str("devops").is_err());

    assert_eq!(Seniority::from_str("lead").unwrap(), Seniority::Lead);
    assert!(Seniority::from_str("principal").is_err());
}
