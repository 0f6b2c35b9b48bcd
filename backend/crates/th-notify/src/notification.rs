use th_core::NotificationKind;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A queued request to notify an account holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub user_id: Uuid,
    pub enqueued_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(kind: NotificationKind, user_id: Uuid) -> Self {
        Self {
            kind,
            user_id,
            enqueued_at: Utc::now(),
        }
    }
}
