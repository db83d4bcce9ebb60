use crate::tests::project;
use crate::{DashboardStats, ProjectFilter, ProjectStatus, status_distribution};

use googletest::prelude::*;

fn portfolio() -> Vec<crate::Project> {
    vec![
        project("p1", ProjectStatus::Done, "2025-01-01", "2025-01-31", &["d1"]),
        project("p2", ProjectStatus::InProgress, "2025-02-01", "2025-03-31", &["d1", "d2"]),
        project("p3", ProjectStatus::InProgress, "2025-02-01", "2025-02-28", &["d2"]),
        project("p4", ProjectStatus::Blocked, "2025-03-01", "2025-04-30", &[]),
    ]
}

#[test]
fn given_portfolio_when_dashboard_stats_then_counts_by_status() {
    // When
    let stats = DashboardStats::from_projects(&portfolio());

    // Then
    assert_that!(
        stats,
        eq(DashboardStats {
            total: 4,
            completed: 1,
            in_progress: 2,
            blocked: 1,
        })
    );
    assert_that!(stats.completion_rate(), eq(25.0));
}

#[test]
fn given_no_projects_when_dashboard_stats_then_zero_rate() {
    let stats = DashboardStats::from_projects(&[]);

    assert_that!(stats.total, eq(0));
    assert_that!(stats.completion_rate(), eq(0.0));
}

#[test]
fn given_portfolio_when_status_distribution_then_all_statuses_present() {
    let distribution = status_distribution(&portfolio());

    assert_that!(distribution.len(), eq(8));
    assert_that!(distribution[0].status, eq(ProjectStatus::ToDo));
    assert_that!(distribution[0].count, eq(0));
    assert_that!(distribution[1].count, eq(2));
    assert_that!(distribution.iter().map(|c| c.count).sum::<usize>(), eq(4));
}

#[test]
fn given_empty_filter_when_apply_then_everything() {
    let projects = portfolio();

    assert_that!(ProjectFilter::default().apply(&projects).len(), eq(4));
}

#[test]
fn given_status_and_developer_filter_when_apply_then_intersection() {
    // Given
    let projects = portfolio();
    let filter = ProjectFilter {
        status: Some(ProjectStatus::InProgress),
        developer: Some("d1".to_string()),
        ..ProjectFilter::default()
    };

    // When
    let ids: Vec<&str> = filter.apply(&projects).iter().map(|p| p.id.as_str()).collect();

    // Then
    assert_that!(ids, elements_are![eq(&"p2")]);
}

#[test]
fn given_search_query_when_apply_then_case_insensitive_name_match() {
    let projects = portfolio();
    let filter = ProjectFilter {
        search: Some("  PROJECT P3 ".to_string()),
        ..ProjectFilter::default()
    };

    let matched = filter.apply(&projects);

    assert_that!(matched.len(), eq(1));
    assert_that!(matched[0].id.as_str(), eq("p3"));
}

#[test]
fn given_owner_filter_when_no_match_then_empty() {
    let projects = portfolio();
    let filter = ProjectFilter {
        owner: Some("Nobody".to_string()),
        ..ProjectFilter::default()
    };

    assert_that!(filter.apply(&projects).is_empty(), eq(true));
}
