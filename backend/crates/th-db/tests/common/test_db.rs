use th_core::UserIdentity;
use th_db::{UserRepository, open_in_memory_pool};

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    open_in_memory_pool()
        .await
        .expect("Failed to create test pool")
}

/// Persists `identity` so tokens and memberships can reference it
pub async fn insert_user(pool: &SqlitePool, identity: &UserIdentity) {
    UserRepository::new(pool.clone())
        .create(identity)
        .await
        .expect("Failed to create test user");
}
