
use crate::{Notification, NotificationSink, NotifyError, Result as NotifyErrorResult};

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

/// Sink that remembers everything it was handed.
#[derive(Default, Clone)]
pub(crate) struct RecordingSink {
    pub(crate) delivered: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingSink {
    pub(crate) fn delivered(&self) -> Vec<Notification> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn deliver(&self, notification: &Notification) -> NotifyErrorResult<()> {
        self.delivered.lock().unwrap().push(notification.clone());
        Ok(())
    }
}

/// Sink that always fails.
pub(crate) struct FailingSink;

#[async_trait]
impl NotificationSink for FailingSink {
    async fn deliver(&self, _notification: &Notification) -> NotifyErrorResult<()> {
        Err(NotifyError::delivery("mail transport unavailable"))
    }
}
