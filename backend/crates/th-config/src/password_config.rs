use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_PASSWORD_MAX_SIMILARITY, DEFAULT_PASSWORD_MIN_LENGTH,
    MAX_PASSWORD_MIN_LENGTH, MIN_PASSWORD_MAX_SIMILARITY,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PasswordConfig {
    pub min_length: usize,
    /// Passwords at or above this similarity ratio to a user attribute are rejected
    pub max_similarity: f64,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_PASSWORD_MIN_LENGTH,
            max_similarity: DEFAULT_PASSWORD_MAX_SIMILARITY,
        }
    }
}

impl PasswordConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.min_length == 0 || self.min_length > MAX_PASSWORD_MIN_LENGTH {
            return Err(ConfigError::password(format!(
                "password.min_length must be between 1 and {}, got {}",
                MAX_PASSWORD_MIN_LENGTH, self.min_length
            )));
        }

        if !(MIN_PASSWORD_MAX_SIMILARITY..=1.0).contains(&self.max_similarity) {
            return Err(ConfigError::password(format!(
                "password.max_similarity must be between {} and 1.0, got {}",
                MIN_PASSWORD_MAX_SIMILARITY, self.max_similarity
            )));
        }

        Ok(())
    }
}
