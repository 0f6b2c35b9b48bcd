use crate::{Notification, NotificationSink, Result as NotifyErrorResult};

use async_trait::async_trait;
use log::info;

/// Sink that only records notifications in the log. Used when no mail
/// transport is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotificationSink;

#[async_trait]
impl NotificationSink for LogNotificationSink {
    async fn deliver(&self, notification: &Notification) -> NotifyErrorResult<()> {
        info!(
            "Notification {} for user {} (queued at {})",
            notification.kind,
            notification.user_id,
            notification.enqueued_at.to_rfc3339()
        );
        Ok(())
    }
}
