use serde::Serialize;

/// The one and only time the raw API key leaves the service.
#[derive(Debug, Serialize)]
pub struct SetupResponse {
    pub api_key: String,
}
