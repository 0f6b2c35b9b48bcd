mod decode;
pub mod organization_repository;
pub mod token_repository;
pub mod user_repository;
