use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The upstream service explicitly rejected the credential.
    #[error("Upstream rejected credential: {message} {location}")]
    Auth {
        message: String,
        location: ErrorLocation,
    },

    /// The upstream service could not be reached, timed out, or failed in a
    /// way we cannot attribute to the credential. Unknown failures land here
    /// deliberately - never treated as success.
    #[error("Upstream unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    /// The upstream service answered but the response did not have the
    /// expected shape.
    #[error("Upstream protocol error: {message} {location}")]
    Protocol {
        message: String,
        location: ErrorLocation,
    },
}

impl UpstreamError {
    #[track_caller]
    pub fn auth<S: Into<String>>(message: S) -> Self {
        Self::Auth {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn protocol<S: Into<String>>(message: S) -> Self {
        Self::Protocol {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, UpstreamError>;
