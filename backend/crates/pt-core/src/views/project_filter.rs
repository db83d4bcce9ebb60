use crate::{Project, ProjectStatus};

/// Criteria for the project list. `None` on any criterion means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub status: Option<ProjectStatus>,
    pub owner: Option<String>,
    pub developer: Option<String>,
    /// Case-insensitive substring of name or description
    pub search: Option<String>,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        if self.status.is_some_and(|status| project.status != status) {
            return false;
        }

        if self
            .owner
            .as_deref()
            .is_some_and(|owner| project.owner != owner)
        {
            return false;
        }

        if self
            .developer
            .as_deref()
            .is_some_and(|developer| !project.is_assigned_to(developer))
        {
            return false;
        }

        match self.search.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => {
                let query = query.to_lowercase();
                project.name.to_lowercase().contains(&query)
                    || project.description.to_lowercase().contains(&query)
            }
            _ => true,
        }
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}
