mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod security_config;
mod server_config;
mod upstream_config;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use security_config::SecurityConfig;
pub use server_config::ServerConfig;
pub use upstream_config::UpstreamConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATABASE_FILENAME: &str = "data.db";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_UPSTREAM_BASE_URL: &str = "https://api.priorlabs.ai";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
const MIN_PORT: u16 = 1024;
/// AES-256 needs a 32-byte key; the configured secret must supply at least
/// that much material.
const MIN_SECRET_KEY_BYTES: usize = 32;

#[cfg(test)]
mod tests;
