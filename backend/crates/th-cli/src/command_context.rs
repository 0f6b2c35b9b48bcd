use th_auth::{AuthGroups, DefaultPasswordPolicy, TokenGenerator};
use th_config::Config;
use th_identity::IdentityLifecycle;
use th_notify::NotificationQueue;

use std::sync::Arc;

use sqlx::SqlitePool;

/// What user commands need: the lifecycle service plus the web client URL
/// used to render verification and reset links.
pub struct CommandContext {
    pub lifecycle: IdentityLifecycle,
    pub web_url: String,
}

impl CommandContext {
    pub fn from_config(config: &Config, pool: SqlitePool, notifications: NotificationQueue) -> Self {
        let lifecycle = IdentityLifecycle::new(
            pool,
            notifications,
            AuthGroups::new(config.auth.groups.iter().cloned()),
        )
        .with_policy(Arc::new(DefaultPasswordPolicy::new(
            config.password.min_length,
            config.password.max_similarity,
        )))
        .with_token_generator(TokenGenerator::new(config.auth.token_bytes));

        Self {
            lifecycle,
            web_url: config.web.base_url().to_string(),
        }
    }
}
