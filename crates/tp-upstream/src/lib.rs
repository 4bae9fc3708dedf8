pub mod classify;
pub mod client;
pub mod error;
pub mod http;

pub use classify::{FailureKind, classify_failure};
pub use client::{TokenStatus, UpstreamClient};
pub use error::{Result, UpstreamError};
pub use http::HttpUpstreamClient;
