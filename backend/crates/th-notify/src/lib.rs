//! Fire-and-forget notification dispatch.
//!
//! Callers enqueue on a bounded channel and return as soon as the message
//! is queued. A separate worker task drains the channel into a
//! [`NotificationSink`]; delivery failures never reach the caller.

pub mod error;
pub mod log_notification_sink;
pub mod notification;
pub mod notification_queue;
pub mod notification_sink;
pub mod notification_worker;

pub use error::{NotifyError, Result};
pub use log_notification_sink::LogNotificationSink;
pub use notification::Notification;
pub use notification_queue::{DEFAULT_QUEUE_CAPACITY, NotificationQueue, NotificationReceiver};
pub use notification_sink::NotificationSink;
pub use notification_worker::NotificationWorker;

#[cfg(test)]
mod tests;
