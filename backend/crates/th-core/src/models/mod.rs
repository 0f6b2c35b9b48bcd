pub mod auth_token;
pub mod checksums;
pub mod identity_core;
pub mod notification_kind;
pub mod organization;
pub mod user_identity;
pub mod user_status;
pub mod verification_outcome;
