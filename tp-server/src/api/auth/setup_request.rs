use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SetupRequest {
    /// A valid token for the upstream prediction service (required)
    pub upstream_token: String,
}
