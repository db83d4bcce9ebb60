use pt_core::{CoreError, FormErrors};
use pt_storage::StorageError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors surfaced by tracker commands
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Storage error: {message} {location}")]
    Storage {
        message: String,
        location: ErrorLocation,
        #[source]
        source: StorageError,
    },

    #[error("Invalid input: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
        #[source]
        source: CoreError,
    },

    /// The submitted project form failed validation; nothing was saved
    #[error("Validation failed for {} field(s) {location}", .errors.len())]
    Validation {
        errors: FormErrors,
        location: ErrorLocation,
    },

    #[error("{entity} not found: {id} {location}")]
    NotFound {
        entity: &'static str,
        id: String,
        location: ErrorLocation,
    },

    #[error("Invalid argument: {message} {location}")]
    InvalidArgument {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn validation(errors: FormErrors) -> Self {
        CliError::Validation {
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        CliError::NotFound {
            entity,
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CliError::InvalidArgument {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StorageError> for CliError {
    #[track_caller]
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { entity, id, .. } => CliError::not_found(entity, id),
            err => CliError::Storage {
                message: err.to_string(),
                location: ErrorLocation::from(Location::caller()),
                source: err,
            },
        }
    }
}

impl From<CoreError> for CliError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        CliError::Core {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
