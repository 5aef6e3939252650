use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{Actor, AgencyId, Role, UserId, WorkflowError};

/// User - an admin, operator or SKPD publisher
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: UserId,
    #[sqlx(rename = "nama")]
    pub name: String,
    pub email: String,
    pub role: Role,
    #[sqlx(rename = "skpd_id")]
    pub agency_id: Option<AgencyId>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Actor context for workflow actions
    pub fn actor(&self) -> Actor {
        Actor::new(self.id, self.role, self.agency_id)
    }
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl User {
    pub async fn create(
        id: UserId,
        name: &str,
        email: &str,
        role: Role,
        agency_id: Option<AgencyId>,
        pool: &PgPool,
    ) -> sqlx::Result<Self> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, nama, email, role, skpd_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(role)
        .bind(agency_id)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(id: UserId, pool: &PgPool) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn get(id: UserId, pool: &PgPool) -> Result<Self, WorkflowError> {
        Self::find_by_id(id, pool)
            .await?
            .ok_or_else(|| WorkflowError::not_found("user", id))
    }

    pub async fn find_all(pool: &PgPool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY role, nama")
            .fetch_all(pool)
            .await
    }

    pub async fn count_by_agency(agency_id: AgencyId, pool: &PgPool) -> sqlx::Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE skpd_id = $1")
            .bind(agency_id)
            .fetch_one(pool)
            .await
    }

    pub async fn set_active(id: UserId, is_active: bool, pool: &PgPool) -> sqlx::Result<Self> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET is_active = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(is_active)
        .fetch_one(pool)
        .await
    }
}
