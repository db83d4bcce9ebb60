use crate::{Project, ProjectStatus};

use serde::Serialize;

/// Headline counters shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub blocked: usize,
}

impl DashboardStats {
    pub fn from_projects(projects: &[Project]) -> Self {
        Self {
            total: projects.len(),
            completed: count_with_status(projects, ProjectStatus::Done),
            in_progress: count_with_status(projects, ProjectStatus::InProgress),
            blocked: count_with_status(projects, ProjectStatus::Blocked),
        }
    }

    /// Share of projects that are done, 0-100
    pub fn completion_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64 * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: ProjectStatus,
    pub label: &'static str,
    pub count: usize,
}

/// Project count for each status, in [`ProjectStatus::ALL`] order. Zero counts are kept.
pub fn status_distribution(projects: &[Project]) -> Vec<StatusCount> {
    ProjectStatus::ALL
        .into_iter()
        .map(|status| StatusCount {
            status,
            label: status.label(),
            count: count_with_status(projects, status),
        })
        .collect()
}

fn count_with_status(projects: &[Project], status: ProjectStatus) -> usize {
    projects.iter().filter(|p| p.status == status).count()
}
