//! Bearer tokens. `user_id` is UNIQUE so an account never has more than one
//! live token; every write path is a single upsert statement. The `_in`
//! variants run on a caller-held connection so a token write can share a
//! transaction with the account row.

use crate::{DbError, Result as DbErrorResult};
use crate::repositories::decode;

use th_core::AuthToken;

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::{FromRow, SqliteConnection, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct TokenRow {
    key: String,
    user_id: String,
    created_at: i64,
}

impl TokenRow {
    fn into_token(self) -> DbErrorResult<AuthToken> {
        Ok(AuthToken {
            key: self.key,
            user_id: decode::uuid(&self.user_id, "th_auth_tokens.user_id")?,
            created_at: decode::timestamp(self.created_at, "th_auth_tokens.created_at")?,
        })
    }
}

pub struct TokenRepository {
    pool: SqlitePool,
}

impl TokenRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> DbErrorResult<Option<AuthToken>> {
        let mut conn = self.pool.acquire().await?;
        Self::find_by_user_in(&mut conn, user_id).await
    }

    pub async fn find_by_user_in(
        conn: &mut SqliteConnection,
        user_id: Uuid,
    ) -> DbErrorResult<Option<AuthToken>> {
        let row = sqlx::query_as::<_, TokenRow>(
            "SELECT key, user_id, created_at FROM th_auth_tokens WHERE user_id = ?",
        )
        .bind(user_id.to_string())
        .fetch_optional(&mut *conn)
        .await?;

        row.map(TokenRow::into_token).transpose()
    }

    pub async fn find_user_id_by_key(&self, key: &str) -> DbErrorResult<Option<Uuid>> {
        let user_id = sqlx::query_scalar::<_, String>(
            "SELECT user_id FROM th_auth_tokens WHERE key = ?",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        user_id
            .map(|id| decode::uuid(&id, "th_auth_tokens.user_id"))
            .transpose()
    }

    /// Replace whatever token the account holds with `token`. Revoke and
    /// issue happen in one statement.
    pub async fn rotate(&self, token: &AuthToken) -> DbErrorResult<()> {
        let mut conn = self.pool.acquire().await?;
        Self::rotate_in(&mut conn, token).await
    }

    pub async fn rotate_in(conn: &mut SqliteConnection, token: &AuthToken) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO th_auth_tokens (key, user_id, created_at)
                VALUES (?, ?, ?)
                ON CONFLICT(user_id) DO UPDATE SET
                    key = excluded.key,
                    created_at = excluded.created_at
            "#,
        )
        .bind(&token.key)
        .bind(token.user_id.to_string())
        .bind(token.created_at.timestamp_millis())
        .execute(&mut *conn)
        .await?;

        Ok(())
    }

    /// Store `candidate` only if the account has no token yet, then return
    /// the account's live token (the existing one or `candidate`).
    pub async fn issue_if_absent(&self, candidate: &AuthToken) -> DbErrorResult<AuthToken> {
        let mut conn = self.pool.acquire().await?;
        Self::issue_if_absent_in(&mut conn, candidate).await
    }

    pub async fn issue_if_absent_in(
        conn: &mut SqliteConnection,
        candidate: &AuthToken,
    ) -> DbErrorResult<AuthToken> {
        sqlx::query(
            r#"
                INSERT INTO th_auth_tokens (key, user_id, created_at)
                VALUES (?, ?, ?)
                ON CONFLICT(user_id) DO NOTHING
            "#,
        )
        .bind(&candidate.key)
        .bind(candidate.user_id.to_string())
        .bind(candidate.created_at.timestamp_millis())
        .execute(&mut *conn)
        .await?;

        Self::find_by_user_in(conn, candidate.user_id)
            .await?
            .ok_or_else(|| DbError::Initialization {
                message: format!("No auth token for user {} after issue", candidate.user_id),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Bind an externally supplied key to the account, replacing any
    /// existing token.
    pub async fn set(&self, user_id: Uuid, key: &str) -> DbErrorResult<AuthToken> {
        let token = AuthToken::new(user_id, key.to_string());
        self.rotate(&token).await?;
        Ok(token)
    }

    /// Delete the account's token. Returns whether one existed.
    pub async fn revoke(&self, user_id: Uuid) -> DbErrorResult<bool> {
        let mut conn = self.pool.acquire().await?;
        Self::revoke_in(&mut conn, user_id).await
    }

    pub async fn revoke_in(conn: &mut SqliteConnection, user_id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM th_auth_tokens WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
