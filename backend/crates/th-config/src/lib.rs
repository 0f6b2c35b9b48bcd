mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod notification_config;
mod password_config;
mod web_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use notification_config::NotificationConfig;
pub use password_config::PasswordConfig;
pub use web_config::WebConfig;

const CONFIG_DIR_ENV: &str = "TH_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".th";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_DATABASE_FILENAME: &str = "termhub.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
const MAX_DATABASE_CONNECTIONS: u32 = 64;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_AUTH_GROUPS: &[&str] = &["admin", "editor", "viewer"];
const DEFAULT_TOKEN_BYTES: usize = 20;
const MIN_TOKEN_BYTES: usize = 16;
const MAX_TOKEN_BYTES: usize = 64;

const DEFAULT_PASSWORD_MIN_LENGTH: usize = 8;
const MAX_PASSWORD_MIN_LENGTH: usize = 128;
const DEFAULT_PASSWORD_MAX_SIMILARITY: f64 = 0.7;
const MIN_PASSWORD_MAX_SIMILARITY: f64 = 0.1;

const DEFAULT_QUEUE_CAPACITY: usize = 256;
const MAX_QUEUE_CAPACITY: usize = 65_536;

const DEFAULT_WEB_URL: &str = "http://localhost:4000";

#[cfg(test)]
mod tests;
