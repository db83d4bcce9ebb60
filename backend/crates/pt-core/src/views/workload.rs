use crate::{DateMetrics, Project, YearMonth};

use std::collections::BTreeMap;

use chrono::{Months, NaiveDate};

/// Share of one developer's capacity per month, in percent.
///
/// Every open project assigned to `developer_id` contributes
/// `100 / assigned developer count` to each month visited when stepping one
/// month at a time from its start date up to its end date. Done projects and
/// projects with unparseable dates are ignored.
pub fn developer_workload(developer_id: &str, projects: &[Project]) -> BTreeMap<YearMonth, f64> {
    let mut workload = BTreeMap::new();

    for project in projects
        .iter()
        .filter(|p| !p.is_done() && p.is_assigned_to(developer_id))
    {
        let (Some(start), Some(end)) = (
            DateMetrics::parse_date(&project.start_date),
            DateMetrics::parse_date(&project.end_date),
        ) else {
            continue;
        };

        let share = 100.0 / project.assigned_devs.len() as f64;
        for month in stepped_months(start.date(), end.date()) {
            *workload.entry(month).or_insert(0.0) += share;
        }
    }

    workload
}

/// Mean monthly load, 0 when there is nothing scheduled
pub fn average_workload(workload: &BTreeMap<YearMonth, f64>) -> f64 {
    if workload.is_empty() {
        return 0.0;
    }
    workload.values().sum::<f64>() / workload.len() as f64
}

fn stepped_months(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = YearMonth> {
    (0u32..)
        .map_while(move |offset| start.checked_add_months(Months::new(offset)))
        .take_while(move |day| *day <= end)
        .map(YearMonth::of)
}
