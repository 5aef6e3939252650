use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::fmt;

use crate::common::{AgencyId, WorkflowError};

/// SKPD activation status (Postgres enum `skpd_status`)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, juniper::GraphQLEnum,
)]
#[sqlx(type_name = "skpd_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AgencyStatus {
    Active,
    Inactive,
}

impl AgencyStatus {
    pub fn toggled(self) -> Self {
        match self {
            AgencyStatus::Active => AgencyStatus::Inactive,
            AgencyStatus::Inactive => AgencyStatus::Active,
        }
    }
}

impl fmt::Display for AgencyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgencyStatus::Active => write!(f, "active"),
            AgencyStatus::Inactive => write!(f, "inactive"),
        }
    }
}

/// Agency - a regional government unit (SKPD) that owns content and a monthly quota
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Agency {
    pub id: AgencyId,
    #[sqlx(rename = "nama")]
    pub name: String,
    #[sqlx(rename = "kuota_bulanan")]
    pub monthly_quota: i32,
    pub status: AgencyStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Agency {
    pub fn is_active(&self) -> bool {
        self.status == AgencyStatus::Active
    }
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Agency {
    pub async fn create(
        id: AgencyId,
        name: &str,
        monthly_quota: i32,
        pool: &PgPool,
    ) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Agency>(
            r#"
            INSERT INTO skpd (id, nama, kuota_bulanan)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(monthly_quota)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(id: AgencyId, pool: &PgPool) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Agency>("SELECT * FROM skpd WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Like `find_by_id`, failing with `NotFound` when absent
    pub async fn get(id: AgencyId, pool: &PgPool) -> Result<Self, WorkflowError> {
        Self::find_by_id(id, pool)
            .await?
            .ok_or_else(|| WorkflowError::not_found("SKPD", id))
    }

    pub async fn find_all(pool: &PgPool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Agency>("SELECT * FROM skpd ORDER BY nama")
            .fetch_all(pool)
            .await
    }

    pub async fn find_active(pool: &PgPool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Agency>("SELECT * FROM skpd WHERE status = 'active' ORDER BY nama")
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        id: AgencyId,
        name: &str,
        monthly_quota: i32,
        pool: &PgPool,
    ) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Agency>(
            r#"
            UPDATE skpd
            SET nama = $2, kuota_bulanan = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(monthly_quota)
        .fetch_one(pool)
        .await
    }

    pub async fn set_status(id: AgencyId, status: AgencyStatus, pool: &PgPool) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Agency>(
            r#"
            UPDATE skpd
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_one(pool)
        .await
    }

    /// Hard delete. Callers must first check the SKPD owns no content or users.
    pub async fn delete(id: AgencyId, pool: &PgPool) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM skpd WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
