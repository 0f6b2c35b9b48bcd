use th_auth::AuthError;
use th_core::CoreError;
use th_db::DbError;
use th_notify::NotifyError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdentityError {
    /// The proposed password was rejected. `messages` are meant for the
    /// account holder and are surfaced verbatim.
    #[error("Credential rejected: {} {location}", .messages.join(" "))]
    CredentialPolicy {
        messages: Vec<String>,
        location: ErrorLocation,
    },

    #[error("User not found: {reference} {location}")]
    UserNotFound {
        reference: String,
        location: ErrorLocation,
    },

    /// Deactivated accounts cannot hold or be issued bearer tokens.
    #[error("User is deactivated: {reference} {location}")]
    InactiveUser {
        reference: String,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Db {
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Auth error: {source} {location}")]
    Auth {
        source: AuthError,
        location: ErrorLocation,
    },

    #[error("Notification error: {source} {location}")]
    Notify {
        source: NotifyError,
        location: ErrorLocation,
    },

    #[error("Invalid identity: {source} {location}")]
    Core {
        source: CoreError,
        location: ErrorLocation,
    },
}

impl IdentityError {
    #[track_caller]
    pub fn user_not_found(reference: impl Into<String>) -> Self {
        Self::UserNotFound {
            reference: reference.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn inactive_user(reference: impl Into<String>) -> Self {
        Self::InactiveUser {
            reference: reference.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Messages for the account holder when the error is recoverable.
    pub fn policy_messages(&self) -> Option<&[String]> {
        match self {
            Self::CredentialPolicy { messages, .. } => Some(messages),
            _ => None,
        }
    }
}

impl From<DbError> for IdentityError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Db {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for IdentityError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match source {
            AuthError::PasswordPolicy { messages, .. } => Self::CredentialPolicy { messages, location },
            source => Self::Auth { source, location },
        }
    }
}

impl From<NotifyError> for IdentityError {
    #[track_caller]
    fn from(source: NotifyError) -> Self {
        Self::Notify {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for IdentityError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;
