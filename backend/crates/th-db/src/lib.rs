pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::pool::{open_in_memory_pool, open_pool};
pub use error::{DbError, Result};
pub use repositories::organization_repository::OrganizationRepository;
pub use repositories::token_repository::TokenRepository;
pub use repositories::user_repository::UserRepository;
