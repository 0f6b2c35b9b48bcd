#![allow(dead_code)]

use th_auth::AuthGroups;
use th_core::UserIdentity;
use th_db::open_in_memory_pool;
use th_identity::IdentityLifecycle;
use th_notify::{NotificationQueue, NotificationReceiver};

use sqlx::SqlitePool;

pub struct TestContext {
    pub pool: SqlitePool,
    pub lifecycle: IdentityLifecycle,
    pub notifications: NotificationReceiver,
}

/// In-memory database plus a lifecycle service whose notification queue
/// is drained by the test itself.
pub async fn setup() -> TestContext {
    let pool = open_in_memory_pool()
        .await
        .expect("Failed to create test pool");
    let (queue, notifications) = NotificationQueue::bounded(16);
    let lifecycle = IdentityLifecycle::new(
        pool.clone(),
        queue,
        AuthGroups::new(["admin", "editor", "viewer"]),
    );

    TestContext {
        pool,
        lifecycle,
        notifications,
    }
}

/// Registers an unverified user with a pending verification token
pub async fn register_user(ctx: &TestContext, username: &str) -> UserIdentity {
    let mut identity = UserIdentity::new(username, Some(format!("{username}@example.org")))
        .expect("valid test username");
    identity.first_name = "Test".to_string();
    identity.last_name = "Person".to_string();
    ctx.lifecycle
        .register(&identity)
        .await
        .expect("Failed to register test user");
    identity
}
