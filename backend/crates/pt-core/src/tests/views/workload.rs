use crate::tests::project;
use crate::{ProjectStatus, YearMonth, average_workload, developer_workload};

use googletest::prelude::*;

fn ym(year: i32, month: u32) -> YearMonth {
    YearMonth { year, month }
}

#[test]
fn given_shared_and_solo_projects_when_workload_then_split_by_team_size() {
    // Given
    let projects = vec![
        project("p1", ProjectStatus::InProgress, "2025-01-15", "2025-03-10", &["d1", "d2"]),
        project("p2", ProjectStatus::ToDo, "2025-02-01", "2025-02-20", &["d1"]),
    ];

    // When
    let workload = developer_workload("d1", &projects);

    // Then
    assert_that!(workload.len(), eq(2));
    assert_that!(workload.get(&ym(2025, 1)).copied(), some(eq(50.0)));
    assert_that!(workload.get(&ym(2025, 2)).copied(), some(eq(150.0)));
    // Stepping lands on 2025-03-15, past the end date
    assert_that!(workload.get(&ym(2025, 3)).copied(), none());
    assert_that!(average_workload(&workload), eq(100.0));
}

#[test]
fn given_done_or_unassigned_projects_when_workload_then_ignored() {
    let projects = vec![
        project("p1", ProjectStatus::Done, "2025-01-01", "2025-03-01", &["d1"]),
        project("p2", ProjectStatus::InProgress, "2025-01-01", "2025-03-01", &["d2"]),
        project("p3", ProjectStatus::InProgress, "bad", "2025-03-01", &["d1"]),
    ];

    let workload = developer_workload("d1", &projects);

    assert_that!(workload.is_empty(), eq(true));
    assert_that!(average_workload(&workload), eq(0.0));
}

#[test]
fn given_month_end_start_when_workload_then_clamps_instead_of_skipping() {
    let projects = vec![project(
        "p1",
        ProjectStatus::InProgress,
        "2025-01-31",
        "2025-03-31",
        &["d1"],
    )];

    let workload = developer_workload("d1", &projects);

    assert_that!(
        workload.keys().copied().collect::<Vec<_>>(),
        elements_are![eq(&ym(2025, 1)), eq(&ym(2025, 2)), eq(&ym(2025, 3))]
    );
}
