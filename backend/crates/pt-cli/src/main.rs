//! pt - project tracker CLI
//!
//! Manages projects and developers stored under the config directory and
//! prints every result as JSON.
//!
//! # Examples
//!
//! ```bash
//! # Add a project
//! pt project add --name "Billing revamp" --owner "C.Tedesco" \
//!     --description "Move invoicing to the new ledger" \
//!     --start 2025-01-06 --end 2025-03-28 --estimated-days 50
//!
//! # Projects with remaining working days, pretty-printed
//! pt project list --status in-progress --pretty
//!
//! # Quarter timeline for one developer
//! pt timeline --range quarter --developer <id>
//! ```

use pt_cli::{Cli, CliError, Tracker, TrackerSettings, execute, logger};
use pt_config::Config;
use pt_storage::{FileBackend, Storage};

use std::process::ExitCode;

use clap::Parser;
use log::error;
use serde_json::{Value, json};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load().and_then(|config| config.validate().map(|()| config)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let log_file = match config.log_file_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logger::initialize(config.logging.level, log_file, config.logging.colored) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let storage_dir = match config.storage_dir() {
        Ok(dir) => dir,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let settings = match TrackerSettings::from_display_config(&config.display) {
        Ok(settings) => settings,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let backend = FileBackend::new(storage_dir).with_quota(config.storage.max_value_bytes);
    let tracker = Tracker::new(Storage::new(backend), settings);

    match execute(&tracker, cli.command) {
        Ok(value) => print_json(&value, cli.pretty),
        Err(CliError::Validation { errors, .. }) => {
            // Field errors are regular output: the caller fixes the form and retries
            print_json(&json!({ "errors": errors }), cli.pretty);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_json(value: &Value, pretty: bool) -> ExitCode {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing response: {}", e);
            ExitCode::FAILURE
        }
    }
}
