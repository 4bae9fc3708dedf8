use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing Authorization header")]
    MissingAuthorization,

    #[error("Authorization header must use the Bearer scheme")]
    InvalidScheme,

    /// Covers both an unknown key and a fingerprint collision that fails
    /// bcrypt verification. Callers cannot tell the two apart.
    #[error("Unknown API key")]
    UnknownApiKey,

    #[error("Upstream rejected the provided token: {message}")]
    RejectedUpstreamToken { message: String },

    #[error("Model {id} not found")]
    ModelNotFound { id: Uuid },

    #[error("Model {id} belongs to another identity")]
    OwnershipViolation { id: Uuid },

    #[error("Cipher failure: {message} {location}")]
    Cipher {
        message: String,
        location: ErrorLocation,
    },

    #[error("Password hash failure: {source} {location}")]
    Hash {
        source: bcrypt::BcryptError,
        location: ErrorLocation,
    },

    #[error("Blocking task failed {location}")]
    Task { location: ErrorLocation },

    #[error(transparent)]
    Db(#[from] tp_db::DbError),

    #[error(transparent)]
    Upstream(#[from] tp_upstream::UpstreamError),
}

impl AuthError {
    #[track_caller]
    pub fn cipher<S: Into<String>>(message: S) -> Self {
        Self::Cipher {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn hash(source: bcrypt::BcryptError) -> Self {
        Self::Hash {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn task() -> Self {
        Self::Task {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
