//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes. Raw upstream diagnostics and
//! anything secret-adjacent stay in the server log, not in the body.

use tp_auth::AuthError;
use tp_core::CoreError;
use tp_db::DbError;
use tp_upstream::UpstreamError;

use std::panic::Location;

use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, malformed, or unknown credentials (401)
    #[error("Unauthenticated: {message} {location}")]
    Unauthenticated {
        message: String,
        location: ErrorLocation,
    },

    /// Authenticated but not the owner (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// The upstream prediction service failed or is unreachable (503)
    #[error("Upstream unavailable: {message} {location}")]
    UpstreamUnavailable {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthenticated<S: Into<String>>(message: S) -> Self {
        Self::Unauthenticated {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::Unauthenticated { message, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "UNAUTHENTICATED".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Forbidden { message, .. } => (
                StatusCode::FORBIDDEN,
                ApiErrorBody {
                    code: "FORBIDDEN".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::UpstreamUnavailable { .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiErrorBody {
                    code: "UPSTREAM_UNAVAILABLE".into(),
                    // Details stay in the log; the body never repeats
                    // upstream diagnostics.
                    message: "The prediction service is currently unavailable".into(),
                    field: None,
                },
            ),
            ApiError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message: "An internal error occurred".into(),
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert credential proxy errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            AuthError::MissingAuthorization | AuthError::InvalidScheme => {
                ApiError::Unauthenticated {
                    message: "Missing or malformed Authorization header".to_string(),
                    location,
                }
            }
            AuthError::UnknownApiKey => ApiError::Unauthenticated {
                message: "Invalid API key".to_string(),
                location,
            },
            AuthError::RejectedUpstreamToken { .. } => {
                // Internal detail is already logged at the proxy
                ApiError::Unauthenticated {
                    message: "Upstream token verification failed".to_string(),
                    location,
                }
            }
            AuthError::ModelNotFound { id } => ApiError::NotFound {
                message: format!("Model {} not found", id),
                location,
            },
            AuthError::OwnershipViolation { .. } => ApiError::Forbidden {
                message: "You do not have access to this model".to_string(),
                location,
            },
            AuthError::Upstream(upstream) => ApiError::from(upstream),
            AuthError::Cipher { .. }
            | AuthError::Hash { .. }
            | AuthError::Task { .. }
            | AuthError::Db(_) => {
                log::error!("Credential proxy failure: {}", e);
                ApiError::Internal {
                    message: "Credential processing failed".to_string(),
                    location,
                }
            }
        }
    }
}

/// Convert upstream client errors to API errors
impl From<UpstreamError> for ApiError {
    #[track_caller]
    fn from(e: UpstreamError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            UpstreamError::Auth { message, .. } => {
                // The stored token stopped working after registration. The
                // raw upstream text stays in the server log only.
                log::warn!("Upstream rejected the stored token: {}", message);
                ApiError::Unauthenticated {
                    message: "Upstream rejected the stored credential".to_string(),
                    location,
                }
            }
            UpstreamError::Unavailable { message, .. }
            | UpstreamError::Protocol { message, .. } => ApiError::UpstreamUnavailable {
                message,
                location,
            },
        }
    }
}

/// Convert domain validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            CoreError::InvalidTaskKind { .. }
            | CoreError::InvalidOutputKind { .. }
            | CoreError::Csv { .. } => ApiError::Validation {
                message: e.to_string(),
                field: None,
                location,
            },
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert multipart extraction errors to API errors
impl From<MultipartError> for ApiError {
    #[track_caller]
    fn from(e: MultipartError) -> Self {
        ApiError::Validation {
            message: format!("Invalid multipart upload: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
