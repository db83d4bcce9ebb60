use crate::backend::{check_key, check_quota};
use crate::{KeyValueBackend, StorageError, StorageResult};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::{Mutex, MutexGuard};

use error_location::ErrorLocation;

/// In-process backend, lost when dropped
#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: Mutex<HashMap<String, String>>,
    max_value_bytes: Option<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(mut self, limit: usize) -> Self {
        self.max_value_bytes = Some(limit);
        self
    }

    #[track_caller]
    fn values(&self) -> StorageResult<MutexGuard<'_, HashMap<String, String>>> {
        self.values.lock().map_err(|_| StorageError::Poisoned {
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        check_key(key)?;
        Ok(self.values()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        check_key(key)?;
        check_quota(key, value, self.max_value_bytes)?;
        self.values()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        check_key(key)?;
        self.values()?.remove(key);
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        self.values()?.clear();
        Ok(())
    }
}
