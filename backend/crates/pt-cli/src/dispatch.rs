use crate::{
    CliError, CliResult, Commands, DeveloperCommands, ProjectCommands, StorageCommands, Tracker,
    project_commands::project_filter,
};

use pt_core::{DeveloperRole, Seniority, TimeRange, YearMonth};
use pt_storage::KeyValueBackend;

use std::str::FromStr;

use chrono::Datelike;
use serde_json::Value;

/// Run one parsed command against `tracker`
pub fn execute<B: KeyValueBackend>(tracker: &Tracker<B>, command: Commands) -> CliResult<Value> {
    match command {
        // Project commands
        Commands::Project { action } => match action {
            ProjectCommands::List {
                status,
                owner,
                developer,
                search,
            } => {
                let filter = project_filter(status, owner, developer, search)?;
                tracker.list_projects(&filter)
            }
            ProjectCommands::Show { id } => tracker.get_project(&id),
            ProjectCommands::Add { fields } => tracker.create_project(fields.into_patch()?),
            ProjectCommands::Update { id, fields } => {
                tracker.update_project(&id, fields.into_patch()?)
            }
            ProjectCommands::Delete { id } => tracker.delete_project(&id),
        },

        // Developer commands
        Commands::Developer { action } => match action {
            DeveloperCommands::List => tracker.list_developers(),
            DeveloperCommands::Add {
                name,
                role,
                seniority,
                weekly_hours,
                allocated_hours,
            } => tracker.create_developer(
                &name,
                DeveloperRole::from_str(&role)?,
                Seniority::from_str(&seniority)?,
                weekly_hours,
                allocated_hours,
            ),
            DeveloperCommands::Assign {
                developer_id,
                project_id,
            } => tracker.assign_developer(&developer_id, &project_id),
            DeveloperCommands::Delete { id } => tracker.delete_developer(&id),
        },

        // Views
        Commands::Stats => tracker.stats(),
        Commands::Timeline { range, developer } => {
            let range = range.as_deref().map(TimeRange::from_str).transpose()?;
            tracker.timeline(range, developer.as_deref())
        }
        Commands::Workload { developer_id } => tracker.workload(&developer_id),
        Commands::Calendar { year, month } => {
            tracker.calendar(calendar_month(tracker.today(), year, month)?)
        }

        // Storage commands
        Commands::Storage { action } => match action {
            StorageCommands::Check => tracker.check_storage(),
            StorageCommands::Clear => tracker.clear_storage(),
        },
    }
}

/// Month picked by `--year`/`--month`; a missing part comes from `today`
fn calendar_month(
    today: chrono::NaiveDate,
    year: Option<i32>,
    month: Option<u32>,
) -> CliResult<Option<YearMonth>> {
    if year.is_none() && month.is_none() {
        return Ok(None);
    }

    let month = month.unwrap_or(today.month());
    if !(1..=12).contains(&month) {
        return Err(CliError::invalid_argument(format!(
            "month must be 1-12, got {month}"
        )));
    }

    Ok(Some(YearMonth {
        year: year.unwrap_or(today.year()),
        month,
    }))
}
