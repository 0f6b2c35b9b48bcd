//! Account lifecycle orchestration.
//!
//! [`IdentityLifecycle`] drives the pure transitions on
//! [`th_core::UserIdentity`] and owns their side effects: persistence, bearer
//! token rotation, notification dispatch and organization lookups.

pub mod container_owner;
pub mod credential_update;
pub mod error;
pub mod identity_lifecycle;
pub mod metrics;

pub use container_owner::ContainerOwner;
pub use credential_update::CredentialUpdate;
pub use error::{IdentityError, Result};
pub use identity_lifecycle::IdentityLifecycle;
pub use metrics::IdentityMetrics;

#[cfg(test)]
mod tests;
