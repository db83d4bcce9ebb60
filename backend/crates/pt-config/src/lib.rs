mod config;
mod display_config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use display_config::DisplayConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

pub const CONFIG_DIR_ENV: &str = "PT_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".pt";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_STORAGE_DIRECTORY: &str = "data";
/// Same order of magnitude as a browser's local storage allowance
const DEFAULT_MAX_VALUE_BYTES: usize = 5 * 1024 * 1024;
pub const MIN_MAX_VALUE_BYTES: usize = 1024;
pub const MAX_MAX_VALUE_BYTES: usize = 64 * 1024 * 1024;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_DATE_FORMAT: &str = "%-d/%-m/%Y";
const DEFAULT_TIME_RANGE: &str = "quarter";
pub const TIME_RANGES: [&str; 3] = ["month", "quarter", "year"];
