use crate::{
    developer_commands::DeveloperCommands, project_commands::ProjectCommands,
    storage_commands::StorageCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Project operations
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },

    /// Developer operations
    Developer {
        #[command(subcommand)]
        action: DeveloperCommands,
    },

    /// Dashboard counters and status breakdown
    Stats,

    /// Gantt bars and developer workload for a time window
    Timeline {
        /// month, quarter or year (defaults to the configured range)
        #[arg(long)]
        range: Option<String>,
        /// Only show this developer's projects
        #[arg(long)]
        developer: Option<String>,
    },

    /// Monthly workload of one developer
    Workload {
        /// Developer ID
        developer_id: String,
    },

    /// Projects running on each day of a month
    Calendar {
        #[arg(long)]
        year: Option<i32>,
        /// 1-12
        #[arg(long)]
        month: Option<u32>,
    },

    /// Storage maintenance
    Storage {
        #[command(subcommand)]
        action: StorageCommands,
    },
}
