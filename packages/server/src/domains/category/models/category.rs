use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{CategoryId, WorkflowError};

/// Category - classification for content; toggled, never destroyed
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: CategoryId,
    #[sqlx(rename = "nama")]
    pub name: String,
    #[sqlx(rename = "deskripsi")]
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub async fn create(
        id: CategoryId,
        name: &str,
        description: Option<&str>,
        pool: &PgPool,
    ) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO kategori (id, nama, deskripsi)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(id: CategoryId, pool: &PgPool) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Category>("SELECT * FROM kategori WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn get(id: CategoryId, pool: &PgPool) -> Result<Self, WorkflowError> {
        Self::find_by_id(id, pool)
            .await?
            .ok_or_else(|| WorkflowError::not_found("category", id))
    }

    pub async fn find_all(active_only: bool, pool: &PgPool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Category>(
            "SELECT * FROM kategori WHERE ($1 = false OR is_active = true) ORDER BY nama",
        )
        .bind(active_only)
        .fetch_all(pool)
        .await
    }

    pub async fn update(
        id: CategoryId,
        name: &str,
        description: Option<&str>,
        pool: &PgPool,
    ) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Category>(
            r#"
            UPDATE kategori
            SET nama = $2, deskripsi = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .fetch_one(pool)
        .await
    }

    pub async fn set_active(id: CategoryId, is_active: bool, pool: &PgPool) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Category>(
            r#"
            UPDATE kategori
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
