use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use error_location::ErrorLocation;

/// Turns plaintext passwords into stored credential handles and checks them.
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> AuthErrorResult<String>;

    /// False for a wrong password and for handles that cannot be parsed.
    fn verify(&self, plaintext: &str, credential: &str) -> bool;
}

/// Argon2id with a random salt per hash, stored as a PHC string.
#[derive(Default, Clone)]
pub struct Argon2CredentialHasher {
    argon2: Argon2<'static>,
}

impl Argon2CredentialHasher {
    pub fn new(argon2: Argon2<'static>) -> Self {
        Self { argon2 }
    }
}

impl CredentialHasher for Argon2CredentialHasher {
    #[track_caller]
    fn hash(&self, plaintext: &str) -> AuthErrorResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::PasswordHash {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    fn verify(&self, plaintext: &str, credential: &str) -> bool {
        match PasswordHash::new(credential) {
            Ok(parsed) => self
                .argon2
                .verify_password(plaintext.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                log::warn!("Stored credential is not a valid PHC string: {e}");
                false
            }
        }
    }
}
