use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Password rejected: {} {location}", .messages.join(" "))]
    PasswordPolicy {
        messages: Vec<String>,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unknown auth group '{name}' {location}")]
    InvalidGroup {
        name: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Messages safe to show the account holder.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::PasswordPolicy { messages, .. } => messages.clone(),
            Self::PasswordHash { .. } => vec!["The password could not be stored.".to_string()],
            Self::InvalidGroup { name, .. } => vec![format!("Unknown group '{name}'.")],
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
