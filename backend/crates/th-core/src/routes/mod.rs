//! Path table for everything the platform mounts under `/users/`.

pub mod account_route;
pub mod resolve;
pub mod user_resource;

/// Mount point of the user routes.
pub const USERS_PREFIX: &str = "/users/";
