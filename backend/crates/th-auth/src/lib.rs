pub mod auth_groups;
pub mod credential_hasher;
pub mod error;
pub mod password_policy;
pub mod similarity;
pub mod token_generator;

pub use auth_groups::AuthGroups;
pub use credential_hasher::{Argon2CredentialHasher, CredentialHasher};
pub use error::{AuthError, Result};
pub use password_policy::{DefaultPasswordPolicy, PasswordPolicy};
pub use token_generator::TokenGenerator;

#[cfg(test)]
mod tests;
