//! Account persistence.
//!
//! Group membership lives in `th_user_groups` and is loaded with the
//! account; it is only written by `create` and `set_groups`.

use crate::Result as DbErrorResult;
use crate::repositories::decode;

use th_core::{Checksums, IdentityCore, UserIdentity};

use serde_json::{Map, Value};
use sqlx::{FromRow, SqliteConnection, SqlitePool};
use uuid::Uuid;

const USER_COLUMNS: &str = r#"
    id, username, email, password_credential, first_name, last_name,
    company, location, website, preferred_locale, extras,
    is_active, is_staff, is_superuser, is_verified, verification_token,
    deactivated_at, logo_path, standard_checksum, smart_checksum,
    date_joined, updated_at
"#;

#[derive(FromRow)]
struct UserRow {
    id: String,
    username: String,
    email: Option<String>,
    password_credential: Option<String>,
    first_name: String,
    last_name: String,
    company: Option<String>,
    location: Option<String>,
    website: Option<String>,
    preferred_locale: Option<String>,
    extras: String,
    is_active: bool,
    is_staff: bool,
    is_superuser: bool,
    is_verified: bool,
    verification_token: Option<String>,
    deactivated_at: Option<i64>,
    logo_path: Option<String>,
    standard_checksum: Option<String>,
    smart_checksum: Option<String>,
    date_joined: i64,
    updated_at: i64,
}

impl UserRow {
    fn into_identity(self, groups: Vec<String>) -> DbErrorResult<UserIdentity> {
        let extras: Map<String, Value> = serde_json::from_str(&self.extras)?;

        Ok(UserIdentity {
            core: IdentityCore {
                id: decode::uuid(&self.id, "th_users.id")?,
                username: self.username,
                password_credential: self.password_credential,
                is_active: self.is_active,
                is_staff: self.is_staff,
                is_superuser: self.is_superuser,
                date_joined: decode::timestamp(self.date_joined, "th_users.date_joined")?,
            },
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            company: self.company,
            location: self.location,
            website: self.website,
            preferred_locale: self.preferred_locale,
            extras,
            is_verified: self.is_verified,
            verification_token: self.verification_token,
            deactivated_at: self
                .deactivated_at
                .map(|ts| decode::timestamp(ts, "th_users.deactivated_at"))
                .transpose()?,
            logo_path: self.logo_path,
            groups,
            checksums: Checksums {
                standard: self.standard_checksum,
                smart: self.smart_checksum,
            },
            updated_at: decode::timestamp(self.updated_at, "th_users.updated_at")?,
        })
    }
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, identity: &UserIdentity) -> DbErrorResult<()> {
        let extras = serde_json::to_string(&identity.extras)?;

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
                INSERT INTO th_users (
                    id, username, email, password_credential, first_name, last_name,
                    company, location, website, preferred_locale, extras,
                    is_active, is_staff, is_superuser, is_verified, verification_token,
                    deactivated_at, logo_path, standard_checksum, smart_checksum,
                    date_joined, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(identity.id().to_string())
        .bind(identity.username())
        .bind(&identity.email)
        .bind(&identity.core.password_credential)
        .bind(&identity.first_name)
        .bind(&identity.last_name)
        .bind(&identity.company)
        .bind(&identity.location)
        .bind(&identity.website)
        .bind(&identity.preferred_locale)
        .bind(extras)
        .bind(identity.core.is_active)
        .bind(identity.core.is_staff)
        .bind(identity.core.is_superuser)
        .bind(identity.is_verified)
        .bind(&identity.verification_token)
        .bind(identity.deactivated_at.map(|dt| dt.timestamp_millis()))
        .bind(&identity.logo_path)
        .bind(&identity.checksums.standard)
        .bind(&identity.checksums.smart)
        .bind(identity.core.date_joined.timestamp_millis())
        .bind(identity.updated_at.timestamp_millis())
        .execute(&mut *tx)
        .await?;

        insert_groups(&mut tx, identity.id(), &identity.groups).await?;

        tx.commit().await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<UserIdentity>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM th_users WHERE id = ?");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        self.hydrate(row).await
    }

    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<UserIdentity>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM th_users WHERE username = ?");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        self.hydrate(row).await
    }

    /// All accounts ordered by username. Deactivated accounts are skipped
    /// unless `include_inactive` is set.
    pub async fn list(&self, include_inactive: bool) -> DbErrorResult<Vec<UserIdentity>> {
        let sql = format!(
            "SELECT {USER_COLUMNS} FROM th_users WHERE is_active = 1 OR ? ORDER BY username"
        );
        let rows = sqlx::query_as::<_, UserRow>(&sql)
            .bind(include_inactive)
            .fetch_all(&self.pool)
            .await?;

        let mut identities = Vec::with_capacity(rows.len());
        for row in rows {
            let groups = self.find_groups(&row.id).await?;
            identities.push(row.into_identity(groups)?);
        }
        Ok(identities)
    }

    /// Write every mutable column. Returns false when no such account exists.
    pub async fn update(&self, identity: &UserIdentity) -> DbErrorResult<bool> {
        let mut conn = self.pool.acquire().await?;
        Self::update_in(&mut conn, identity).await
    }

    /// [`Self::update`] on a caller-held connection, typically a transaction
    /// that also writes the account's token.
    pub async fn update_in(
        conn: &mut SqliteConnection,
        identity: &UserIdentity,
    ) -> DbErrorResult<bool> {
        let extras = serde_json::to_string(&identity.extras)?;

        let result = sqlx::query(
            r#"
                UPDATE th_users SET
                    username = ?, email = ?, password_credential = ?,
                    first_name = ?, last_name = ?, company = ?, location = ?,
                    website = ?, preferred_locale = ?, extras = ?,
                    is_active = ?, is_staff = ?, is_superuser = ?,
                    is_verified = ?, verification_token = ?, deactivated_at = ?,
                    logo_path = ?, standard_checksum = ?, smart_checksum = ?,
                    updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(identity.username())
        .bind(&identity.email)
        .bind(&identity.core.password_credential)
        .bind(&identity.first_name)
        .bind(&identity.last_name)
        .bind(&identity.company)
        .bind(&identity.location)
        .bind(&identity.website)
        .bind(&identity.preferred_locale)
        .bind(extras)
        .bind(identity.core.is_active)
        .bind(identity.core.is_staff)
        .bind(identity.core.is_superuser)
        .bind(identity.is_verified)
        .bind(&identity.verification_token)
        .bind(identity.deactivated_at.map(|dt| dt.timestamp_millis()))
        .bind(&identity.logo_path)
        .bind(&identity.checksums.standard)
        .bind(&identity.checksums.smart)
        .bind(identity.updated_at.timestamp_millis())
        .bind(identity.id().to_string())
        .execute(&mut *conn)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Persist only the stored checksums.
    pub async fn update_checksums(&self, id: Uuid, checksums: &Checksums) -> DbErrorResult<bool> {
        let result = sqlx::query(
            "UPDATE th_users SET standard_checksum = ?, smart_checksum = ? WHERE id = ?",
        )
        .bind(&checksums.standard)
        .bind(&checksums.smart)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Replace the account's group membership.
    pub async fn set_groups(&self, id: Uuid, groups: &[String]) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM th_user_groups WHERE user_id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await?;

        insert_groups(&mut tx, id, groups).await?;

        tx.commit().await?;
        Ok(())
    }

    async fn hydrate(&self, row: Option<UserRow>) -> DbErrorResult<Option<UserIdentity>> {
        match row {
            Some(row) => {
                let groups = self.find_groups(&row.id).await?;
                Ok(Some(row.into_identity(groups)?))
            }
            None => Ok(None),
        }
    }

    async fn find_groups(&self, user_id: &str) -> DbErrorResult<Vec<String>> {
        let groups = sqlx::query_scalar::<_, String>(
            "SELECT name FROM th_user_groups WHERE user_id = ? ORDER BY name",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(groups)
    }
}

async fn insert_groups(
    conn: &mut SqliteConnection,
    user_id: Uuid,
    groups: &[String],
) -> DbErrorResult<()> {
    for name in groups {
        sqlx::query("INSERT OR IGNORE INTO th_user_groups (user_id, name) VALUES (?, ?)")
            .bind(user_id.to_string())
            .bind(name)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}
