use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DisplayConfig, LoggingConfig, StorageConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub display: DisplayConfig,
}

impl Config {
    /// Load config from disk and environment.
    ///
    /// Loading order:
    /// 1. PT_CONFIG_DIR env var, else ./.pt/
    /// 2. Create the config directory if missing
    /// 3. Read config.toml if present, else defaults
    /// 4. Apply PT_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PT_CONFIG_DIR env var > ./.pt/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all sections. Call after load().
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.storage.validate()?;
        self.display.validate()?;

        if let Some(file) = &self.logging.file
            && (file.trim().is_empty() || Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigError::logging(
                "logging.file must be a relative file name and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Absolute path of the storage directory.
    pub fn storage_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.storage.dir))
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = &self.logging.file else {
            return Ok(None);
        };
        Ok(Some(
            Self::config_dir()?.join(&self.logging.dir).join(file),
        ))
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  storage: {} (max {} bytes per value)",
            self.storage.dir, self.storage.max_value_bytes
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
        info!(
            "  display: date_format={}, time_range={}, dark_mode={}",
            self.display.date_format, self.display.default_time_range, self.display.dark_mode
        );
    }

    fn apply_env_overrides(&mut self) {
        // Storage
        Self::apply_env_string("PT_STORAGE_DIR", &mut self.storage.dir);
        Self::apply_env_parse(
            "PT_STORAGE_MAX_VALUE_BYTES",
            &mut self.storage.max_value_bytes,
        );

        // Logging
        Self::apply_env_parse("PT_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PT_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PT_LOG_FILE", &mut self.logging.file);

        // Display
        Self::apply_env_string("PT_DISPLAY_DATE_FORMAT", &mut self.display.date_format);
        Self::apply_env_string(
            "PT_DISPLAY_TIME_RANGE",
            &mut self.display.default_time_range,
        );
        Self::apply_env_bool("PT_DISPLAY_DARK_MODE", &mut self.display.dark_mode);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
