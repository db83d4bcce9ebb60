use crate::tests::valid_form;
use crate::{CoreError, Developer, DeveloperRole, Project, ProjectFormData, Seniority, UtilizationLevel};

#[test]
fn test_project_from_valid_form() {
    let form = ProjectFormData {
        name: "  Billing revamp ".to_string(),
        assigned_devs: vec!["d1".to_string(), "d2".to_string(), "d1".to_string()],
        ..valid_form()
    };

    let project = Project::from_form("p1".to_string(), form).unwrap();

    assert_eq!(project.id, "p1");
    assert_eq!(project.name, "Billing revamp");
    assert_eq!(project.estimated_days, 5);
    assert_eq!(project.assigned_devs, vec!["d1", "d2"]);
    assert!(project.is_assigned_to("d2"));
    assert!(!project.is_assigned_to("d3"));
}

#[test]
fn test_project_from_invalid_form_reports_field() {
    let form = ProjectFormData {
        progress: 101,
        ..valid_form()
    };

    let result = Project::from_form("p1".to_string(), form);

    match result {
        Err(CoreError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("progress")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_project_to_form_round_trips() {
    let project = Project::from_form("p9".to_string(), valid_form()).unwrap();

    let form = project.to_form();

    assert_eq!(form.id.as_deref(), Some("p9"));
    assert_eq!(Project::from_form("p9".to_string(), form).unwrap(), project);
}

#[test]
fn test_project_serializes_camel_case() {
    let project = Project::from_form("p1".to_string(), valid_form()).unwrap();

    let json = serde_json::to_value(&project).unwrap();

    assert_eq!(json["startDate"], "2025-01-01");
    assert_eq!(json["estimatedDays"], 5);
    assert_eq!(json["status"], "to-do");
    assert!(json["assignedDevs"].is_array());
}

#[test]
fn test_project_deserializes_without_assigned_devs() {
    let json = r#"{
        "id": "p1", "name": "Legacy", "owner": "C.Tedesco",
        "description": "Imported without developers", "startDate": "2025-01-01",
        "endDate": "2025-03-01", "status": "blocked", "priority": "high",
        "progress": 10, "estimatedDays": 30
    }"#;

    let project: Project = serde_json::from_str(json).unwrap();

    assert!(project.assigned_devs.is_empty());
}

#[test]
fn test_developer_utilization() {
    let mut developer = Developer::new(
        "d1".to_string(),
        "Ada".to_string(),
        DeveloperRole::Backend,
        Seniority::Senior,
        40,
    );
    assert_eq!(developer.utilization(), 0.0);

    developer.allocated_hours = 30;
    assert_eq!(developer.utilization(), 75.0);
    assert_eq!(developer.utilization_level(), UtilizationLevel::High);

    developer.allocated_hours = 36;
    assert_eq!(developer.utilization_level(), UtilizationLevel::Overloaded);

    developer.weekly_hours = 0;
    assert_eq!(developer.utilization(), 0.0);
}
