use crate::clock;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const AUTHORIZATION_HEADER: &str = "Authorization";
pub const TOKEN_SCHEME: &str = "Token";

/// Opaque bearer token bound to exactly one identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub key: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl AuthToken {
    pub fn new(user_id: Uuid, key: String) -> Self {
        Self {
            key,
            user_id,
            created_at: clock::now(),
        }
    }

    /// `Token <key>`
    pub fn header_value(&self) -> String {
        format!("{TOKEN_SCHEME} {}", self.key)
    }

    /// Headers an HTTP client presents to authenticate as the token's owner.
    pub fn auth_headers(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(AUTHORIZATION_HEADER.to_string(), self.header_value())])
    }
}
