use crate::{KeyValueBackend, StorageError, StorageResult};

use std::panic::Location;

use error_location::ErrorLocation;

use log::{debug, error};
use serde::Serialize;
use serde::de::DeserializeOwned;

const PROBE_KEY: &str = "__storage_test__";

/// JSON persistence over a [`KeyValueBackend`].
///
/// Failures are logged and reported as `false` or as the caller's default,
/// never raised, so a broken store cannot take the application down.
#[derive(Debug)]
pub struct Storage<B> {
    backend: B,
}

impl<B: KeyValueBackend> Storage<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Serialize `value` under `key`. `false` if serialization or the write failed.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        let serialized = match serde_json::to_string(value) {
            Ok(serialized) => serialized,
            Err(e) => {
                error!("Error serializing value for storage (key: {key}): {e}");
                return false;
            }
        };

        match self.backend.set(key, &serialized) {
            Ok(()) => {
                debug!("Saved {} bytes under '{key}'", serialized.len());
                true
            }
            Err(e @ StorageError::QuotaExceeded { .. }) => {
                error!("Storage quota exceeded: {e}");
                false
            }
            Err(e) => {
                error!("Error saving to storage (key: {key}): {e}");
                false
            }
        }
    }

    /// Value stored under `key`, or `default` when it is missing or unreadable
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                error!("Error loading from storage (key: {key}): {e}");
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                error!("Error parsing stored value (key: {key}): {e}");
                default
            }
        }
    }

    /// Value stored under `key`, `None` when missing.
    ///
    /// Unlike [`Storage::load`], backend and parse failures are returned, so
    /// read-modify-write callers never overwrite a value they could not read.
    #[track_caller]
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        let location = Location::caller();
        let Some(raw) = self.backend.get(key)? else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Serde {
                key: key.to_string(),
                source,
                location: ErrorLocation::from(location),
            })
    }

    pub fn remove(&self, key: &str) -> bool {
        match self.backend.remove(key) {
            Ok(()) => true,
            Err(e) => {
                error!("Error removing from storage (key: {key}): {e}");
                false
            }
        }
    }

    pub fn clear(&self) -> bool {
        match self.backend.clear() {
            Ok(()) => true,
            Err(e) => {
                error!("Error clearing storage: {e}");
                false
            }
        }
    }

    /// Round-trips a probe key to check the backend accepts writes
    pub fn is_available(&self) -> bool {
        self.backend.set(PROBE_KEY, PROBE_KEY).is_ok() && self.backend.remove(PROBE_KEY).is_ok()
    }
}
