use crate::{CliError, CliResult, ProjectPatch};

use pt_config::DisplayConfig;
use pt_core::{
    DEFAULT_DISPLAY_FORMAT, DashboardStats, DateMetrics, DeadlineUrgency, Developer, DeveloperRole,
    ProgressBand, Project, ProjectFilter, ProjectFormData, ProjectValidator, Seniority, TimeRange,
    TimelineBar, UtilizationLevel, YearMonth, average_workload, calendar_month,
    developer_workload, months_in_range, status_distribution, today_marker,
};
use pt_storage::{
    DeveloperRepository, KeyValueBackend, ProjectRepository, Storage, generate_developer_id,
    generate_project_id,
};

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use log::{info, warn};
use serde::Serialize;
use serde_json::{Value, json};

/// Display preferences applied to command output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerSettings {
    /// strftime pattern for the `*Formatted` date fields
    pub date_format: String,
    pub default_time_range: TimeRange,
    pub dark_mode: bool,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DISPLAY_FORMAT.to_string(),
            default_time_range: TimeRange::default(),
            dark_mode: false,
        }
    }
}

impl TrackerSettings {
    pub fn from_display_config(display: &DisplayConfig) -> CliResult<Self> {
        Ok(Self {
            date_format: display.date_format.clone(),
            default_time_range: TimeRange::from_str(&display.default_time_range)?,
            dark_mode: display.dark_mode,
        })
    }
}

/// A project as printed: the stored record plus its derived date metrics
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectView<'a> {
    #[serde(flatten)]
    project: &'a Project,
    start_date_formatted: String,
    end_date_formatted: String,
    total_days: i64,
    remaining_working_days: i64,
    urgency: DeadlineUrgency,
    progress_band: ProgressBand,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeveloperView<'a> {
    #[serde(flatten)]
    developer: &'a Developer,
    utilization: f64,
    utilization_level: UtilizationLevel,
}

impl<'a> From<&'a Developer> for DeveloperView<'a> {
    fn from(developer: &'a Developer) -> Self {
        Self {
            developer,
            utilization: developer.utilization(),
            utilization_level: developer.utilization_level(),
        }
    }
}

/// Project tracker operations over a key-value store.
///
/// Every operation returns a JSON document ready to print.
pub struct Tracker<B> {
    storage: Storage<B>,
    settings: TrackerSettings,
    today: NaiveDate,
}

impl<B: KeyValueBackend> Tracker<B> {
    pub fn new(storage: Storage<B>, settings: TrackerSettings) -> Self {
        Self {
            storage,
            settings,
            today: Local::now().date_naive(),
        }
    }

    /// Pin the date used as "today" by remaining-day and timeline output
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn storage(&self) -> &Storage<B> {
        &self.storage
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    fn projects(&self) -> ProjectRepository<'_, B> {
        ProjectRepository::new(&self.storage)
    }

    fn developers(&self) -> DeveloperRepository<'_, B> {
        DeveloperRepository::new(&self.storage)
    }

    /// Display preferences echoed with the dashboard views
    fn display(&self) -> Value {
        json!({ "darkMode": self.settings.dark_mode })
    }

    fn project_view<'a>(&self, project: &'a Project) -> ProjectView<'a> {
        let remaining = DateMetrics::remaining_working_days_on(&project.end_date, self.today);
        ProjectView {
            project,
            start_date_formatted: DateMetrics::format_date_with(
                &project.start_date,
                &self.settings.date_format,
            ),
            end_date_formatted: DateMetrics::format_date_with(
                &project.end_date,
                &self.settings.date_format,
            ),
            total_days: DateMetrics::total_days(&project.start_date, &project.end_date),
            remaining_working_days: remaining,
            urgency: DeadlineUrgency::from_remaining(remaining),
            progress_band: ProgressBand::from_progress(project.progress),
        }
    }

    // =========================================================================
    // Project Operations
    // =========================================================================

    pub fn list_projects(&self, filter: &ProjectFilter) -> CliResult<Value> {
        let projects = self.projects().list();
        let views: Vec<ProjectView<'_>> = filter
            .apply(&projects)
            .into_iter()
            .map(|p| self.project_view(p))
            .collect();
        let count = views.len();

        Ok(json!({ "projects": views, "count": count }))
    }

    pub fn get_project(&self, id: &str) -> CliResult<Value> {
        let project = self
            .projects()
            .find(id)
            .ok_or_else(|| CliError::not_found("Project", id))?;

        Ok(json!({ "project": self.project_view(&project) }))
    }

    /// Create a project from the default form with `patch` applied
    pub fn create_project(&self, patch: ProjectPatch) -> CliResult<Value> {
        let mut form = ProjectFormData::default();
        patch.apply(&mut form);

        let project = self.accept_form(generate_project_id(), form)?;
        self.projects().upsert(project.clone())?;
        self.sync_assignments(&project)?;

        info!("Created project {} ({})", project.id, project.name);
        Ok(json!({ "project": self.project_view(&project) }))
    }

    /// Apply `patch` to a stored project; the merged form must pass validation
    pub fn update_project(&self, id: &str, patch: ProjectPatch) -> CliResult<Value> {
        let existing = self
            .projects()
            .find(id)
            .ok_or_else(|| CliError::not_found("Project", id))?;

        let mut form = existing.to_form();
        patch.apply(&mut form);

        let project = self.accept_form(existing.id, form)?;
        self.projects().upsert(project.clone())?;
        self.sync_assignments(&project)?;

        info!("Updated project {}", project.id);
        Ok(json!({ "project": self.project_view(&project) }))
    }

    pub fn delete_project(&self, id: &str) -> CliResult<Value> {
        if !self.projects().delete(id)? {
            return Err(CliError::not_found("Project", id));
        }

        Ok(json!({ "deleted": id }))
    }

    /// Validate the form and make sure every assigned developer exists
    fn accept_form(&self, id: String, form: ProjectFormData) -> CliResult<Project> {
        let errors = ProjectValidator::validate(&form);
        if ProjectValidator::has_errors(&errors) {
            warn!("Rejected project form: {} invalid field(s)", errors.len());
            return Err(CliError::validation(errors));
        }

        let known = self.developers().list();
        if let Some(unknown) = form
            .assigned_devs
            .iter()
            .find(|id| !known.iter().any(|d| &d.id == *id))
        {
            return Err(CliError::not_found("Developer", unknown.as_str()));
        }

        Ok(Project::from_form(id, form)?)
    }

    /// Mirror the project's developer list on the developer records
    fn sync_assignments(&self, project: &Project) -> CliResult<()> {
        let developers = self.developers();

        for mut developer in developers.list() {
            let linked = developer.projects.iter().any(|id| id == &project.id);
            let assigned = project.is_assigned_to(&developer.id);
            if linked == assigned {
                continue;
            }

            if assigned {
                developer.projects.push(project.id.clone());
            } else {
                developer.projects.retain(|id| id != &project.id);
            }
            developers.upsert(developer)?;
        }

        Ok(())
    }

    // =========================================================================
    // Developer Operations
    // =========================================================================

    pub fn list_developers(&self) -> CliResult<Value> {
        let developers = self.developers().list();
        let views: Vec<DeveloperView<'_>> = developers.iter().map(DeveloperView::from).collect();

        Ok(json!({ "developers": views }))
    }

    pub fn create_developer(
        &self,
        name: &str,
        role: DeveloperRole,
        seniority: Seniority,
        weekly_hours: u32,
        allocated_hours: u32,
    ) -> CliResult<Value> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CliError::invalid_argument("developer name cannot be empty"));
        }

        let mut developer = Developer::new(
            generate_developer_id(),
            name.to_string(),
            role,
            seniority,
            weekly_hours,
        );
        developer.allocated_hours = allocated_hours;
        self.developers().upsert(developer.clone())?;

        info!("Created developer {} ({})", developer.id, developer.name);
        Ok(json!({ "developer": DeveloperView::from(&developer) }))
    }

    pub fn assign_developer(&self, developer_id: &str, project_id: &str) -> CliResult<Value> {
        self.developers().assign(developer_id, project_id)?;

        Ok(json!({ "assigned": { "developerId": developer_id, "projectId": project_id } }))
    }

    pub fn delete_developer(&self, id: &str) -> CliResult<Value> {
        if !self.developers().delete(id)? {
            return Err(CliError::not_found("Developer", id));
        }

        Ok(json!({ "deleted": id }))
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Dashboard counters, status breakdown and team utilization
    pub fn stats(&self) -> CliResult<Value> {
        let projects = self.projects().list();
        let developers = self.developers().list();
        let stats = DashboardStats::from_projects(&projects);
        let utilization: Vec<DeveloperView<'_>> =
            developers.iter().map(DeveloperView::from).collect();

        Ok(json!({
            "stats": stats,
            "completionRate": stats.completion_rate(),
            "distribution": status_distribution(&projects),
            "developers": utilization,
            "display": self.display(),
        }))
    }

    /// Gantt bars and monthly workload for the window around today.
    ///
    /// With `developer`, only that developer's projects and workload are shown.
    pub fn timeline(&self, range: Option<TimeRange>, developer: Option<&str>) -> CliResult<Value> {
        let range = range.unwrap_or(self.settings.default_time_range);
        let (start, end) = range.bounds(self.today);
        let months = months_in_range(start, end);

        let projects = self.projects().list();
        let bars: Vec<TimelineBar> = projects
            .iter()
            .filter(|p| developer.is_none_or(|id| p.is_assigned_to(id)))
            .filter_map(|p| TimelineBar::place(p, start, end))
            .collect();

        let workload: Vec<Value> = self
            .developers()
            .list()
            .iter()
            .filter(|d| developer.is_none_or(|id| d.id == id))
            .map(|d| {
                let load = developer_workload(&d.id, &projects);
                let in_window: BTreeMap<String, f64> = months
                    .iter()
                    .map(|m| (m.to_string(), load.get(m).copied().unwrap_or(0.0)))
                    .collect();
                json!({ "developerId": d.id, "name": d.name, "months": in_window })
            })
            .collect();

        Ok(json!({
            "range": range,
            "start": start.to_string(),
            "end": end.to_string(),
            "months": months,
            "todayMarker": today_marker(start, end, self.today),
            "bars": bars,
            "workload": workload,
            "display": self.display(),
        }))
    }

    pub fn workload(&self, developer_id: &str) -> CliResult<Value> {
        if self.developers().find(developer_id).is_none() {
            return Err(CliError::not_found("Developer", developer_id));
        }

        let load = developer_workload(developer_id, &self.projects().list());
        let months: BTreeMap<String, f64> =
            load.iter().map(|(m, pct)| (m.to_string(), *pct)).collect();

        Ok(json!({
            "developerId": developer_id,
            "months": months,
            "average": average_workload(&load),
        }))
    }

    /// Project ids per day of `month`, defaulting to the current month
    pub fn calendar(&self, month: Option<YearMonth>) -> CliResult<Value> {
        let month = month.unwrap_or(YearMonth::of(self.today));
        if month.first_day().is_none() {
            return Err(CliError::invalid_argument(format!(
                "no such month: {}-{}",
                month.year, month.month
            )));
        }

        let days = calendar_month(&self.projects().list(), month);
        Ok(json!({ "month": month, "days": days }))
    }

    // =========================================================================
    // Storage Operations
    // =========================================================================

    pub fn check_storage(&self) -> CliResult<Value> {
        Ok(json!({ "available": self.storage.is_available() }))
    }

    pub fn clear_storage(&self) -> CliResult<Value> {
        let cleared = self.storage.clear();
        if cleared {
            info!("Cleared all stored data");
        }
        Ok(json!({ "cleared": cleared }))
    }
}
