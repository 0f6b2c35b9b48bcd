use crate::{AuthError, Result as AuthErrorResult, similarity};

use th_core::UserIdentity;

use std::panic::Location;

use error_location::ErrorLocation;

pub const DEFAULT_MIN_LENGTH: usize = 8;
pub const DEFAULT_MAX_SIMILARITY: f64 = 0.7;

/// Passwords rejected outright regardless of length.
const COMMON_PASSWORDS: &[&str] = &[
    "123456",
    "12345678",
    "123456789",
    "1234567890",
    "111111",
    "abc123",
    "admin",
    "changeme",
    "dragon",
    "football",
    "iloveyou",
    "letmein",
    "monkey",
    "password",
    "password1",
    "password123",
    "qwerty",
    "qwerty123",
    "qwertyuiop",
    "sunshine",
    "welcome",
    "welcome1",
];

/// Decides whether a plaintext password is acceptable for an identity.
pub trait PasswordPolicy: Send + Sync {
    /// `Err(AuthError::PasswordPolicy)` carries every violation, not just the first.
    fn validate(&self, password: &str, identity: &UserIdentity) -> AuthErrorResult<()>;
}

/// Length, common-password, all-numeric and similarity-to-profile checks.
#[derive(Debug, Clone)]
pub struct DefaultPasswordPolicy {
    min_length: usize,
    max_similarity: f64,
}

impl DefaultPasswordPolicy {
    pub fn new(min_length: usize, max_similarity: f64) -> Self {
        Self {
            min_length,
            max_similarity,
        }
    }

    fn similar_attribute(&self, password: &str, identity: &UserIdentity) -> Option<&'static str> {
        let email_local = identity
            .email
            .as_deref()
            .and_then(|email| email.split('@').next());

        let attributes: [(&'static str, Option<&str>); 4] = [
            ("username", Some(identity.username())),
            ("first name", Some(identity.first_name.as_str())),
            ("last name", Some(identity.last_name.as_str())),
            ("email address", email_local),
        ];

        let password = password.to_lowercase();
        attributes
            .into_iter()
            .filter_map(|(label, value)| value.map(|v| (label, v.to_lowercase())))
            .filter(|(_, value)| !value.is_empty())
            .find(|(_, value)| {
                std::iter::once(value.as_str())
                    .chain(value.split(|c: char| !c.is_alphanumeric()))
                    .filter(|part| !part.is_empty())
                    .any(|part| similarity::ratio(&password, part) >= self.max_similarity)
            })
            .map(|(label, _)| label)
    }
}

impl Default for DefaultPasswordPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH, DEFAULT_MAX_SIMILARITY)
    }
}

impl PasswordPolicy for DefaultPasswordPolicy {
    #[track_caller]
    fn validate(&self, password: &str, identity: &UserIdentity) -> AuthErrorResult<()> {
        let mut messages = Vec::new();

        if password.chars().count() < self.min_length {
            messages.push(format!(
                "This password is too short. It must contain at least {} characters.",
                self.min_length
            ));
        }

        if COMMON_PASSWORDS.contains(&password.to_lowercase().trim()) {
            messages.push("This password is too common.".to_string());
        }

        if !password.is_empty() && password.chars().all(|c| c.is_ascii_digit()) {
            messages.push("This password is entirely numeric.".to_string());
        }

        if let Some(attribute) = self.similar_attribute(password, identity) {
            messages.push(format!("The password is too similar to the {attribute}."));
        }

        if messages.is_empty() {
            Ok(())
        } else {
            log::debug!(
                "Password rejected for {}: {} violation(s)",
                identity.username(),
                messages.len()
            );
            Err(AuthError::PasswordPolicy {
                messages,
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}
