use crate::{ConfigError, ConfigErrorResult, DEFAULT_WEB_URL};

use serde::Deserialize;

/// The browser client that verification and reset links point at.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub url: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_WEB_URL),
        }
    }
}

impl WebConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.url.trim();
        let host = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .ok_or_else(|| ConfigError::web("web.url must start with http:// or https://"))?;

        if host.trim_matches('/').is_empty() {
            return Err(ConfigError::web("web.url must include a host"));
        }

        Ok(())
    }

    /// URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.url.trim().trim_end_matches('/')
    }
}
