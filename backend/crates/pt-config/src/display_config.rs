use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATE_FORMAT, DEFAULT_TIME_RANGE, TIME_RANGES};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// strftime pattern for rendered dates
    pub date_format: String,
    /// Timeline window used when none is given: month, quarter or year
    pub default_time_range: String,
    pub dark_mode: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: String::from(DEFAULT_DATE_FORMAT),
            default_time_range: String::from(DEFAULT_TIME_RANGE),
            dark_mode: false,
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.date_format.trim().is_empty() {
            return Err(ConfigError::display("display.date_format cannot be empty"));
        }

        if !TIME_RANGES.contains(&self.default_time_range.as_str()) {
            return Err(ConfigError::display(format!(
                "display.default_time_range must be one of {}, got {}",
                TIME_RANGES.join("/"),
                self.default_time_range
            )));
        }

        Ok(())
    }
}
