use crate::{Notification, NotifyError, Result as NotifyErrorResult};

use th_core::NotificationKind;

use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;
use tokio::sync::mpsc;
use uuid::Uuid;

pub const DEFAULT_QUEUE_CAPACITY: usize = 256;

/// Receiving half, consumed by [`crate::NotificationWorker::spawn`].
pub type NotificationReceiver = mpsc::Receiver<Notification>;

/// Sending half of the notification channel. Cheap to clone; the worker
/// exits once every clone is dropped and the backlog is drained.
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    sender: mpsc::Sender<Notification>,
}

impl NotificationQueue {
    /// Create a queue holding at most `capacity` undelivered notifications.
    pub fn bounded(capacity: usize) -> (Self, NotificationReceiver) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        (Self { sender }, receiver)
    }

    /// Queue a notification. Waits only for channel capacity, never for
    /// delivery.
    pub async fn enqueue(&self, kind: NotificationKind, user_id: Uuid) -> NotifyErrorResult<()> {
        self.sender
            .send(Notification::new(kind, user_id))
            .await
            .map_err(|_| NotifyError::QueueClosed {
                kind,
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!("Queued {} notification for user {}", kind, user_id);
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
