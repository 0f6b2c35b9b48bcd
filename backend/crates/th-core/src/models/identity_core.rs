use crate::clock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authentication-level part of an identity: who the account is and whether
/// it may log in at all. Profile data lives on [`crate::UserIdentity`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityCore {
    pub id: Uuid,
    pub username: String,
    /// Hashed credential handle, `None` until a password is set
    #[serde(skip_serializing)]
    pub password_credential: Option<String>,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub date_joined: DateTime<Utc>,
}

impl IdentityCore {
    pub fn new(username: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            password_credential: None,
            is_active: true,
            is_staff: false,
            is_superuser: false,
            date_joined: clock::now(),
        }
    }

    pub fn has_usable_credential(&self) -> bool {
        self.password_credential.is_some()
    }
}
