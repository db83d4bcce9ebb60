use crate::ProjectPatch;

use pt_core::{CoreResult, Priority, ProjectFilter, ProjectStatus};

use std::str::FromStr;

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List projects, optionally filtered
    List {
        /// Status (to-do, in-progress, done, waiting, blocked, postponed, waived, delayed)
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        owner: Option<String>,
        /// Only projects assigned to this developer ID
        #[arg(long)]
        developer: Option<String>,
        /// Case-insensitive match on name or description
        #[arg(long)]
        search: Option<String>,
    },
    /// Show a project by ID
    Show {
        /// Project ID
        id: String,
    },
    /// Add a project; prints field errors and saves nothing when the form is invalid
    Add {
        #[command(flatten)]
        fields: ProjectFields,
    },
    /// Update fields of a project
    Update {
        /// Project ID
        id: String,
        #[command(flatten)]
        fields: ProjectFields,
    },
    /// Delete a project
    Delete {
        /// Project ID
        id: String,
    },
}

/// Form fields shared by `add` and `update`
#[derive(Args, Debug, Default)]
pub struct ProjectFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub owner: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Start date (YYYY-MM-DD)
    #[arg(long = "start")]
    pub start_date: Option<String>,
    /// End date (YYYY-MM-DD)
    #[arg(long = "end")]
    pub end_date: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    /// low, medium, high or critical
    #[arg(long)]
    pub priority: Option<String>,
    /// Completion percentage
    #[arg(long, allow_negative_numbers = true)]
    pub progress: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    pub estimated_days: Option<i64>,
    /// Comma-separated developer IDs; replaces the current assignment
    #[arg(long, value_delimiter = ',')]
    pub devs: Option<Vec<String>>,
}

impl ProjectFields {
    pub fn into_patch(self) -> CoreResult<ProjectPatch> {
        Ok(ProjectPatch {
            name: self.name,
            owner: self.owner,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status.as_deref().map(ProjectStatus::from_str).transpose()?,
            priority: self.priority.as_deref().map(Priority::from_str).transpose()?,
            progress: self.progress,
            estimated_days: self.estimated_days,
            assigned_devs: self.devs,
        })
    }
}

pub(crate) fn project_filter(
    status: Option<String>,
    owner: Option<String>,
    developer: Option<String>,
    search: Option<String>,
) -> CoreResult<ProjectFilter> {
    Ok(ProjectFilter {
        status: status.as_deref().map(ProjectStatus::from_str).transpose()?,
        owner,
        developer,
        search,
    })
}
