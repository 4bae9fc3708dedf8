use crate::{ConfigError, ConfigErrorResult, MIN_SECRET_KEY_BYTES};

use serde::Deserialize;

/// Server-held secret for encrypting stored upstream tokens.
///
/// There is no default: the secret must come from `TP_SECRET_KEY` or the
/// config file, and must provide at least 32 bytes of material. It is
/// read-only after startup and must never be logged.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SecurityConfig {
    pub secret_key: Option<String>,
}

impl SecurityConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.secret_key {
            None => Err(ConfigError::security(
                "security.secret_key is required (set TP_SECRET_KEY)",
            )),
            Some(ref key) if key.len() < MIN_SECRET_KEY_BYTES => Err(ConfigError::security(
                format!(
                    "security.secret_key must be at least {} bytes, got {}",
                    MIN_SECRET_KEY_BYTES,
                    key.len()
                ),
            )),
            Some(_) => Ok(()),
        }
    }
}
