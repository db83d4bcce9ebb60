use crate::{DateMetrics, Project, YearMonth};

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

/// Horizontal placement of a project inside a Gantt window, in percent of its width
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineBar {
    pub project_id: String,
    pub offset_percent: f64,
    pub width_percent: f64,
}

impl TimelineBar {
    /// Place `project` in `[range_start, range_end]`, clipped to the window.
    ///
    /// `None` when the project has unparseable or misordered dates, lies
    /// entirely outside the window, or the window is empty.
    pub fn place(project: &Project, range_start: NaiveDate, range_end: NaiveDate) -> Option<Self> {
        let range_days = (range_end - range_start).num_days();
        if range_days <= 0 {
            return None;
        }

        let start = DateMetrics::parse_date(&project.start_date)?.date();
        let end = DateMetrics::parse_date(&project.end_date)?.date();
        if end < start || end < range_start || start > range_end {
            return None;
        }

        let visible_start = start.max(range_start);
        let visible_end = end.min(range_end);
        let range_days = range_days as f64;

        Some(Self {
            project_id: project.id.clone(),
            offset_percent: (visible_start - range_start).num_days() as f64 / range_days * 100.0,
            width_percent: (visible_end - visible_start).num_days() as f64 / range_days * 100.0,
        })
    }
}

/// Position of `today` in the window, if it falls inside
pub fn today_marker(range_start: NaiveDate, range_end: NaiveDate, today: NaiveDate) -> Option<f64> {
    let range_days = (range_end - range_start).num_days();
    if range_days <= 0 || today < range_start || today > range_end {
        return None;
    }
    Some((today - range_start).num_days() as f64 / range_days as f64 * 100.0)
}

/// Ids of the projects running on each day of `month`, keyed by day of month.
///
/// Days without projects are omitted.
pub fn calendar_month(projects: &[Project], month: YearMonth) -> BTreeMap<u32, Vec<String>> {
    let mut by_day: BTreeMap<u32, Vec<String>> = BTreeMap::new();

    for project in projects {
        let (Some(start), Some(end)) = (
            DateMetrics::parse_date(&project.start_date),
            DateMetrics::parse_date(&project.end_date),
        ) else {
            continue;
        };

        for day in 1..=month.days_in_month() {
            let Some(midnight) = NaiveDate::from_ymd_opt(month.year, month.month, day)
                .and_then(|date| date.and_hms_opt(0, 0, 0))
            else {
                continue;
            };

            if start <= midnight && midnight <= end {
                by_day.entry(day).or_default().push(project.id.clone());
            }
        }
    }

    by_day
}
