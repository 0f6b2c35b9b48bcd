mod common;

use common::{create_test_pool, create_test_user, insert_user};

use th_core::AuthToken;
use th_db::{TokenRepository, UserRepository};

use googletest::prelude::*;
use sqlx::SqlitePool;
use uuid::Uuid;

async fn token_count(pool: &SqlitePool, user_id: Uuid) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM th_auth_tokens WHERE user_id = ?")
        .bind(user_id.to_string())
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn given_user_without_token_when_issuing_then_candidate_becomes_live() {
    // Given
    let pool = create_test_pool().await;
    let user = create_test_user("ana");
    insert_user(&pool, &user).await;
    let repo = TokenRepository::new(pool.clone());

    // When
    let issued = repo
        .issue_if_absent(&AuthToken::new(user.id(), "k1".to_string()))
        .await
        .unwrap();

    // Then
    assert_eq!(issued.key, "k1");
    assert_that!(repo.find_user_id_by_key("k1").await.unwrap(), some(eq(user.id())));
}

#[tokio::test]
async fn given_live_token_when_issuing_again_then_existing_token_is_returned() {
    // Given
    let pool = create_test_pool().await;
    let user = create_test_user("ana");
    insert_user(&pool, &user).await;
    let repo = TokenRepository::new(pool.clone());
    repo.issue_if_absent(&AuthToken::new(user.id(), "k1".to_string()))
        .await
        .unwrap();

    // When
    let second = repo
        .issue_if_absent(&AuthToken::new(user.id(), "k2".to_string()))
        .await
        .unwrap();

    // Then
    assert_eq!(second.key, "k1");
    assert_that!(repo.find_user_id_by_key("k2").await.unwrap(), none());
    assert_that!(token_count(&pool, user.id()).await, eq(1));
}

#[tokio::test]
async fn given_live_token_when_rotated_then_old_key_no_longer_resolves() {
    // Given
    let pool = create_test_pool().await;
    let user = create_test_user("ana");
    insert_user(&pool, &user).await;
    let repo = TokenRepository::new(pool.clone());
    repo.rotate(&AuthToken::new(user.id(), "k1".to_string()))
        .await
        .unwrap();

    // When
    repo.rotate(&AuthToken::new(user.id(), "k2".to_string()))
        .await
        .unwrap();

    // Then
    assert_that!(repo.find_user_id_by_key("k1").await.unwrap(), none());
    assert_that!(repo.find_user_id_by_key("k2").await.unwrap(), some(eq(user.id())));
    assert_that!(token_count(&pool, user.id()).await, eq(1));
}

#[tokio::test]
async fn given_live_token_when_set_explicitly_then_external_key_replaces_it() {
    // Given
    let pool = create_test_pool().await;
    let user = create_test_user("ana");
    insert_user(&pool, &user).await;
    let repo = TokenRepository::new(pool.clone());
    repo.rotate(&AuthToken::new(user.id(), "k1".to_string()))
        .await
        .unwrap();

    // When
    let token = repo.set(user.id(), "external-key").await.unwrap();

    // Then
    assert_eq!(token.key, "external-key");
    let live = repo.find_by_user(user.id()).await.unwrap().unwrap();
    assert_eq!(live.key, "external-key");
}

#[tokio::test]
async fn given_live_token_when_revoked_then_user_has_no_token() {
    // Given
    let pool = create_test_pool().await;
    let user = create_test_user("ana");
    insert_user(&pool, &user).await;
    let repo = TokenRepository::new(pool.clone());
    repo.rotate(&AuthToken::new(user.id(), "k1".to_string()))
        .await
        .unwrap();

    // When
    let revoked = repo.revoke(user.id()).await.unwrap();
    let revoked_again = repo.revoke(user.id()).await.unwrap();

    // Then
    assert!(revoked);
    assert!(!revoked_again);
    assert_that!(repo.find_by_user(user.id()).await.unwrap(), none());
}

#[tokio::test]
async fn given_unknown_user_when_issuing_token_then_foreign_key_rejects_it() {
    // Given
    let pool = create_test_pool().await;
    let repo = TokenRepository::new(pool);

    // When
    let result = repo
        .issue_if_absent(&AuthToken::new(Uuid::new_v4(), "k1".to_string()))
        .await;

    // Then
    assert_that!(result, err(anything()));
}

#[tokio::test]
async fn given_transaction_when_dropped_uncommitted_then_account_and_token_writes_roll_back() {
    // Given
    let pool = create_test_pool().await;
    let mut user = create_test_user("ana");
    insert_user(&pool, &user).await;
    let repo = TokenRepository::new(pool.clone());
    repo.rotate(&AuthToken::new(user.id(), "k1".to_string()))
        .await
        .unwrap();

    // When
    {
        let mut tx = pool.begin().await.unwrap();
        user.set_credential("handle".to_string());
        assert!(UserRepository::update_in(&mut tx, &user).await.unwrap());
        assert!(TokenRepository::revoke_in(&mut tx, user.id()).await.unwrap());
    }

    // Then
    let stored = UserRepository::new(pool.clone())
        .find_by_id(user.id())
        .await
        .unwrap()
        .unwrap();
    assert_that!(stored.core.password_credential, none());
    assert_that!(repo.find_user_id_by_key("k1").await.unwrap(), some(eq(user.id())));
}

#[tokio::test]
async fn given_transaction_when_committed_then_both_writes_are_visible() {
    // Given
    let pool = create_test_pool().await;
    let mut user = create_test_user("ana");
    insert_user(&pool, &user).await;
    let repo = TokenRepository::new(pool.clone());

    // When
    let mut tx = pool.begin().await.unwrap();
    user.set_credential("handle".to_string());
    UserRepository::update_in(&mut tx, &user).await.unwrap();
    let candidate = AuthToken::new(user.id(), "k2".to_string());
    let issued = TokenRepository::issue_if_absent_in(&mut tx, &candidate)
        .await
        .unwrap();
    tx.commit().await.unwrap();

    // Then
    assert_eq!(issued.key, "k2");
    assert_that!(token_count(&pool, user.id()).await, eq(1));
    let stored = UserRepository::new(pool)
        .find_by_id(user.id())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.core.password_credential.as_deref(), Some("handle"));
}
