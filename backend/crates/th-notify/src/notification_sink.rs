use crate::{Notification, Result as NotifyErrorResult};

use async_trait::async_trait;

/// Final destination of queued notifications (mailer, webhook, log).
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn deliver(&self, notification: &Notification) -> NotifyErrorResult<()>;
}
