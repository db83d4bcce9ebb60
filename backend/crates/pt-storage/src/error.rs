use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error at {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Serialization error for key '{key}': {source} {location}")]
    Serde {
        key: String,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Quota exceeded for key '{key}': {size} bytes > {limit} bytes {location}")]
    QuotaExceeded {
        key: String,
        size: usize,
        limit: usize,
        location: ErrorLocation,
    },

    #[error("Invalid storage key '{key}' {location}")]
    InvalidKey { key: String, location: ErrorLocation },

    #[error("Failed to persist key '{key}' {location}")]
    WriteFailed { key: String, location: ErrorLocation },

    #[error("{entity} not found: {id} {location}")]
    NotFound {
        entity: &'static str,
        id: String,
        location: ErrorLocation,
    },

    #[error("Backend lock poisoned {location}")]
    Poisoned { location: ErrorLocation },
}

impl StorageError {
    #[track_caller]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn write_failed(key: impl Into<String>) -> Self {
        Self::WriteFailed {
            key: key.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;
