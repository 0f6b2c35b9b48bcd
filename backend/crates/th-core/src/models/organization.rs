use crate::clock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Organization that can own sources and collections alongside users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: Uuid,
    pub mnemonic: String,
    pub name: String,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Organization {
    pub fn new(mnemonic: String, name: String, created_by: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            mnemonic,
            name,
            created_by,
            created_at: clock::now(),
        }
    }

    pub fn uri(&self) -> String {
        format!("/orgs/{}/", self.mnemonic)
    }
}
