//! Startup errors for the server binary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Logger initialization failed: {message}")]
    Logger { message: String },

    #[error("Failed to open log file {path}: {source}")]
    LogFile {
        path: String,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
