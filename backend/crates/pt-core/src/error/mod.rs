use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid project status: {value} {location}")]
    InvalidProjectStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid priority: {value} {location}")]
    InvalidPriority {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid developer role: {value} {location}")]
    InvalidDeveloperRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid seniority: {value} {location}")]
    InvalidSeniority {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid form field: {value} {location}")]
    InvalidFormField {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid time range: {value} {location}")]
    InvalidTimeRange {
        value: String,
        location: ErrorLocation,
    },
}

pub type CoreResult<T> = StdResult<T, CoreError>;
