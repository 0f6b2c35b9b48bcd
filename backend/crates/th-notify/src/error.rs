use th_core::NotificationKind;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Notification queue is closed, dropped {kind} notification {location}")]
    QueueClosed {
        kind: NotificationKind,
        location: ErrorLocation,
    },

    #[error("Notification delivery failed: {message} {location}")]
    Delivery {
        message: String,
        location: ErrorLocation,
    },
}

impl NotifyError {
    #[track_caller]
    pub fn delivery(message: impl Into<String>) -> Self {
        Self::Delivery {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, NotifyError>;
