//! pt-cli library
//!
//! Command definitions and the [`Tracker`] layer they run against, shared by
//! the `pt` binary and the integration tests.

pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod developer_commands;
pub(crate) mod dispatch;
pub mod logger;
pub(crate) mod project_commands;
pub(crate) mod storage_commands;
pub(crate) mod tracker;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use developer_commands::DeveloperCommands;
pub use dispatch::execute;
pub use project_commands::{ProjectCommands, ProjectFields};
pub use storage_commands::StorageCommands;
pub use tracker::{CliError, CliResult, ProjectPatch, Tracker, TrackerSettings};
