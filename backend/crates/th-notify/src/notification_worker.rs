use crate::{NotificationReceiver, NotificationSink};

use std::sync::Arc;

use log::{info, warn};
use tokio::task::JoinHandle;

/// Background task draining the notification channel.
pub struct NotificationWorker {
    handle: JoinHandle<u64>,
}

impl NotificationWorker {
    pub fn spawn(mut receiver: NotificationReceiver, sink: Arc<dyn NotificationSink>) -> Self {
        let handle = tokio::spawn(async move {
            let mut delivered = 0u64;

            while let Some(notification) = receiver.recv().await {
                match sink.deliver(&notification).await {
                    Ok(()) => delivered += 1,
                    Err(e) => warn!(
                        "Dropping {} notification for user {}: {}",
                        notification.kind, notification.user_id, e
                    ),
                }
            }

            info!("Notification worker stopped after {} deliveries", delivered);
            delivered
        });

        Self { handle }
    }

    /// Wait for the worker to drain the queue and exit. Only returns once
    /// every [`crate::NotificationQueue`] handle has been dropped. Yields
    /// the number of successful deliveries.
    pub async fn join(self) -> u64 {
        match self.handle.await {
            Ok(delivered) => delivered,
            Err(e) => {
                warn!("Notification worker terminated abnormally: {}", e);
                0
            }
        }
    }
}
