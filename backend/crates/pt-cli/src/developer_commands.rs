use clap::Subcommand;

pub const DEFAULT_WEEKLY_HOURS: u32 = 40;

#[derive(Subcommand)]
pub enum DeveloperCommands {
    /// List developers with their utilization
    List,
    /// Add a developer
    Add {
        #[arg(long)]
        name: String,
        /// backend, frontend or fullstack
        #[arg(long)]
        role: String,
        /// junior, mid, senior or lead
        #[arg(long)]
        seniority: String,
        #[arg(long, default_value_t = DEFAULT_WEEKLY_HOURS)]
        weekly_hours: u32,
        #[arg(long, default_value_t = 0)]
        allocated_hours: u32,
    },
    /// Assign a developer to a project
    Assign {
        /// Developer ID
        developer_id: String,
        /// Project ID
        project_id: String,
    },
    /// Delete a developer and unassign them everywhere
    Delete {
        /// Developer ID
        id: String,
    },
}
