use crate::Result as DbErrorResult;
use crate::repositories::decode;

use th_core::Organization;

use chrono::Utc;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct OrganizationRow {
    id: String,
    mnemonic: String,
    name: String,
    created_by: String,
    created_at: i64,
}

impl OrganizationRow {
    fn into_organization(self) -> DbErrorResult<Organization> {
        Ok(Organization {
            id: decode::uuid(&self.id, "th_organizations.id")?,
            mnemonic: self.mnemonic,
            name: self.name,
            created_by: decode::uuid(&self.created_by, "th_organizations.created_by")?,
            created_at: decode::timestamp(self.created_at, "th_organizations.created_at")?,
        })
    }
}

pub struct OrganizationRepository {
    pool: SqlitePool,
}

impl OrganizationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, organization: &Organization) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO th_organizations (id, mnemonic, name, created_by, created_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(organization.id.to_string())
        .bind(&organization.mnemonic)
        .bind(&organization.name)
        .bind(organization.created_by.to_string())
        .bind(organization.created_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Organization>> {
        let row = sqlx::query_as::<_, OrganizationRow>(
            "SELECT id, mnemonic, name, created_by, created_at FROM th_organizations WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(OrganizationRow::into_organization).transpose()
    }

    pub async fn add_member(&self, organization_id: Uuid, user_id: Uuid) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT OR IGNORE INTO th_organization_members (organization_id, user_id, created_at)
                VALUES (?, ?, ?)
            "#,
        )
        .bind(organization_id.to_string())
        .bind(user_id.to_string())
        .bind(Utc::now().timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn remove_member(&self, organization_id: Uuid, user_id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query(
            "DELETE FROM th_organization_members WHERE organization_id = ? AND user_id = ?",
        )
        .bind(organization_id.to_string())
        .bind(user_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn is_member(&self, organization_id: Uuid, user_id: Uuid) -> DbErrorResult<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
                SELECT COUNT(*) FROM th_organization_members
                WHERE organization_id = ? AND user_id = ?
            "#,
        )
        .bind(organization_id.to_string())
        .bind(user_id.to_string())
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    /// Organizations the user is a member of.
    pub async fn count_for_user(&self, user_id: Uuid) -> DbErrorResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM th_organization_members WHERE user_id = ?",
        )
        .bind(user_id.to_string())
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Organizations the user is a member of and also created.
    pub async fn count_owned_by_user(&self, user_id: Uuid) -> DbErrorResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
                SELECT COUNT(*)
                FROM th_organizations o
                JOIN th_organization_members m ON m.organization_id = o.id
                WHERE m.user_id = ? AND o.created_by = ?
            "#,
        )
        .bind(user_id.to_string())
        .bind(user_id.to_string())
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
