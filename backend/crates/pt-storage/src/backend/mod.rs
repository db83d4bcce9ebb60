pub mod file_backend;
pub mod memory_backend;

use crate::{StorageError, StorageResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Raw string key-value store underneath [`crate::Storage`]
pub trait KeyValueBackend {
    /// `Ok(None)` when the key has never been written
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removing a missing key is not an error
    fn remove(&self, key: &str) -> StorageResult<()>;

    fn clear(&self) -> StorageResult<()>;
}

/// Keys become file names, so only `[A-Za-z0-9_-]` is allowed
#[track_caller]
pub(crate) fn check_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey {
            key: key.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

#[track_caller]
pub(crate) fn check_quota(key: &str, value: &str, limit: Option<usize>) -> StorageResult<()> {
    match limit {
        Some(limit) if value.len() > limit => Err(StorageError::QuotaExceeded {
            key: key.to_string(),
            size: value.len(),
            limit,
            location: ErrorLocation::from(Location::caller()),
        }),
        _ => Ok(()),
    }
}
