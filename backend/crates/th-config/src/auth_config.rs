use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_GROUPS, DEFAULT_TOKEN_BYTES, MAX_TOKEN_BYTES,
    MIN_TOKEN_BYTES,
};

use std::collections::HashSet;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Closed set of auth group names accounts may belong to
    pub groups: Vec<String>,
    /// Random bytes per bearer token key (hex encoded, so keys are twice as long)
    pub token_bytes: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            groups: DEFAULT_AUTH_GROUPS.iter().map(|g| g.to_string()).collect(),
            token_bytes: DEFAULT_TOKEN_BYTES,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.groups.is_empty() {
            return Err(ConfigError::auth("auth.groups must name at least one group"));
        }

        let mut seen = HashSet::new();
        for group in &self.groups {
            if group.trim().is_empty() {
                return Err(ConfigError::auth("auth.groups cannot contain empty names"));
            }
            if !seen.insert(group.as_str()) {
                return Err(ConfigError::auth(format!(
                    "auth.groups contains '{}' more than once",
                    group
                )));
            }
        }

        if !(MIN_TOKEN_BYTES..=MAX_TOKEN_BYTES).contains(&self.token_bytes) {
            return Err(ConfigError::auth(format!(
                "auth.token_bytes must be between {} and {}, got {}",
                MIN_TOKEN_BYTES, MAX_TOKEN_BYTES, self.token_bytes
            )));
        }

        Ok(())
    }
}
