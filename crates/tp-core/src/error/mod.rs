use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid task kind: {value} {location}")]
    InvalidTaskKind {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid output kind: {value} {location}")]
    InvalidOutputKind {
        value: String,
        location: ErrorLocation,
    },

    #[error("CSV parse error: {message} {location}")]
    Csv {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error without a field reference
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            field: None,
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }

    /// Create a validation error tied to a specific field
    #[track_caller]
    pub fn validation_field<S: Into<String>, F: Into<String>>(message: S, field: F) -> Self {
        CoreError::Validation {
            message: message.into(),
            field: Some(field.into()),
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
