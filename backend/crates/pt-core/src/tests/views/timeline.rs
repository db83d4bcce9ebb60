use crate::tests::project;
use crate::{ProjectStatus, TimeRange, TimelineBar, YearMonth, calendar_month, months_in_range, today_marker};

use std::str::FromStr;

use chrono::NaiveDate;
use googletest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn given_mid_month_today_when_bounds_then_windows_match_range() {
    let today = date(2025, 5, 31);

    assert_that!(
        TimeRange::Month.bounds(today),
        eq((date(2025, 5, 1), date(2025, 5, 31)))
    );
    assert_that!(
        TimeRange::Quarter.bounds(today),
        eq((date(2025, 4, 30), date(2025, 7, 31)))
    );
    assert_that!(
        TimeRange::Year.bounds(today),
        eq((date(2025, 1, 1), date(2025, 12, 31)))
    );
}

#[test]
fn given_range_names_when_parsed_then_known_only() {
    assert_that!(TimeRange::from_str("year").unwrap(), eq(TimeRange::Year));
    assert_that!(TimeRange::from_str("decade"), err(anything()));
    assert_that!(TimeRange::default(), eq(TimeRange::Quarter));
}

#[test]
fn given_range_crossing_year_when_months_in_range_then_inclusive() {
    let months = months_in_range(date(2024, 11, 20), date(2025, 2, 1));

    assert_that!(
        months.iter().map(|m| m.to_string()).collect::<Vec<_>>(),
        elements_are![eq("2024-11"), eq("2024-12"), eq("2025-01"), eq("2025-02")]
    );
    assert_that!(months_in_range(date(2025, 2, 1), date(2024, 1, 1)).is_empty(), eq(true));
}

#[test]
fn given_project_inside_window_when_place_then_percentages() {
    // 100 day window
    let start = date(2025, 1, 1);
    let end = date(2025, 4, 11);
    let p = project("p1", ProjectStatus::InProgress, "2025-01-11", "2025-02-20", &[]);

    let bar = TimelineBar::place(&p, start, end).unwrap();

    assert_that!(bar.offset_percent, eq(10.0));
    assert_that!(bar.width_percent, eq(40.0));
}

#[test]
fn given_project_overlapping_window_start_when_place_then_clipped() {
    let start = date(2025, 1, 1);
    let end = date(2025, 4, 11);
    let p = project("p1", ProjectStatus::InProgress, "2024-12-01", "2025-01-21", &[]);

    let bar = TimelineBar::place(&p, start, end).unwrap();

    assert_that!(bar.offset_percent, eq(0.0));
    assert_that!(bar.width_percent, eq(20.0));
}

#[test]
fn given_project_outside_window_or_bad_dates_when_place_then_none() {
    let start = date(2025, 1, 1);
    let end = date(2025, 4, 11);

    let before = project("p1", ProjectStatus::Done, "2024-01-01", "2024-02-01", &[]);
    let broken = project("p2", ProjectStatus::Done, "never", "2025-02-01", &[]);
    let reversed = project("p3", ProjectStatus::Done, "2025-03-01", "2025-02-01", &[]);

    assert_that!(TimelineBar::place(&before, start, end), none());
    assert_that!(TimelineBar::place(&broken, start, end), none());
    assert_that!(TimelineBar::place(&reversed, start, end), none());
    assert_that!(TimelineBar::place(&before, start, start), none());
}

#[test]
fn given_today_in_window_when_marker_then_position() {
    let start = date(2025, 1, 1);
    let end = date(2025, 4, 11);

    assert_that!(today_marker(start, end, date(2025, 2, 20)), some(eq(50.0)));
    assert_that!(today_marker(start, end, date(2025, 5, 1)), none());
}

#[test]
fn given_projects_when_calendar_month_then_grouped_by_day() {
    // Given
    let projects = vec![
        project("p1", ProjectStatus::InProgress, "2025-01-30", "2025-02-02", &[]),
        project("p2", ProjectStatus::InProgress, "2025-02-02", "2025-02-03", &[]),
        project("p3", ProjectStatus::InProgress, "oops", "2025-02-03", &[]),
    ];

    // When
    let by_day = calendar_month(&projects, YearMonth { year: 2025, month: 2 });

    // Then
    assert_that!(
        by_day.keys().copied().collect::<Vec<_>>(),
        elements_are![eq(&1), eq(&2), eq(&3)]
    );
    assert_that!(by_day[&2].len(), eq(2));
    assert_that!(by_day[&3][0].as_str(), eq("p2"));
}

#[test]
fn given_february_when_days_in_month_then_leap_aware() {
    assert_that!(YearMonth { year: 2024, month: 2 }.days_in_month(), eq(29));
    assert_that!(YearMonth { year: 2025, month: 2 }.days_in_month(), eq(28));
    assert_that!(YearMonth { year: 2025, month: 12 }.days_in_month(), eq(31));
}
