use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_UPSTREAM_BASE_URL, DEFAULT_UPSTREAM_TIMEOUT_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the TabPFN service.
    pub base_url: String,
    /// Per-call timeout. A hanging upstream call maps to 503 at the API.
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_UPSTREAM_BASE_URL),
            timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    }
}

impl UpstreamConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::upstream(format!(
                "upstream.base_url must be an http(s) URL, got {}",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::upstream(
                "upstream.timeout_secs must be greater than 0",
            ));
        }

        Ok(())
    }
}
