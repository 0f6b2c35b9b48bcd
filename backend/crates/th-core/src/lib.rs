pub mod clock;
pub mod error;
pub mod fingerprint;
pub mod mixins;
pub mod models;
pub mod routes;
pub mod search;

pub use error::{CoreError, Result};
pub use fingerprint::{ChecksumFields, Fingerprint, SMART_CHECKSUM_FIELDS, STANDARD_CHECKSUM_FIELDS};
pub use mixins::has_fingerprint::HasFingerprint;
pub use mixins::has_logo::HasLogo;
pub use mixins::has_source_container::HasSourceContainer;
pub use models::auth_token::AuthToken;
pub use models::checksums::Checksums;
pub use models::identity_core::IdentityCore;
pub use models::notification_kind::NotificationKind;
pub use models::organization::Organization;
pub use models::user_identity::UserIdentity;
pub use models::user_status::UserStatus;
pub use models::verification_outcome::VerificationOutcome;
pub use routes::account_route::AccountRoute;
pub use routes::resolve::{RouteMatch, is_valid_namespace, resolve};
pub use routes::user_resource::UserResource;
pub use search::search_field::{SearchField, SortOrder, USER_SEARCH_FIELDS};

#[cfg(test)]
mod tests;
