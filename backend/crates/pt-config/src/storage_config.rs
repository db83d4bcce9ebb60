use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MAX_VALUE_BYTES, DEFAULT_STORAGE_DIRECTORY,
    MAX_MAX_VALUE_BYTES, MIN_MAX_VALUE_BYTES,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for stored collections, relative to the config dir
    pub dir: String,
    /// Largest single stored value in bytes
    pub max_value_bytes: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_STORAGE_DIRECTORY),
            max_value_bytes: DEFAULT_MAX_VALUE_BYTES,
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let dir = std::path::Path::new(&self.dir);
        if self.dir.is_empty() || dir.is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::storage(
                "storage.dir must be a non-empty relative path and cannot contain '..'",
            ));
        }

        if self.max_value_bytes < MIN_MAX_VALUE_BYTES || self.max_value_bytes > MAX_MAX_VALUE_BYTES
        {
            return Err(ConfigError::storage(format!(
                "storage.max_value_bytes must be {}-{}, got {}",
                MIN_MAX_VALUE_BYTES, MAX_MAX_VALUE_BYTES, self.max_value_bytes
            )));
        }

        Ok(())
    }
}
