use pt_core::{Priority, ProjectFormData, ProjectStatus};

/// Field values supplied on the command line. `None` keeps the form's current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub owner: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<ProjectStatus>,
    pub priority: Option<Priority>,
    pub progress: Option<i64>,
    pub estimated_days: Option<i64>,
    pub assigned_devs: Option<Vec<String>>,
}

impl ProjectPatch {
    pub fn apply(self, form: &mut ProjectFormData) {
        if let Some(name) = self.name {
            form.name = name;
        }
        if let Some(owner) = self.owner {
            form.owner = owner;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        if let Some(start_date) = self.start_date {
            form.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            form.end_date = end_date;
        }
        if let Some(status) = self.status {
            form.status = status;
        }
        if let Some(priority) = self.priority {
            form.priority = priority;
        }
        if let Some(progress) = self.progress {
            form.progress = progress;
        }
        if let Some(estimated_days) = self.estimated_days {
            form.estimated_days = Some(estimated_days);
        }
        if let Some(devs) = self.assigned_devs {
            form.assigned_devs = devs.into_iter().filter(|id| !id.trim().is_empty()).collect();
        }
    }
}
