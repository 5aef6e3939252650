use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, PgPool};
use typed_builder::TypedBuilder;

use super::status::ContentStatus;
use crate::common::{AgencyId, CategoryId, ContentId, ReportPeriod, UserId, WorkflowError};

/// Content - an item an SKPD publisher submits for publication (table `konten`)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Content {
    pub id: ContentId,
    #[sqlx(rename = "skpd_id")]
    pub agency_id: AgencyId,
    pub publisher_id: UserId,
    #[sqlx(rename = "kategori_id")]
    pub category_id: CategoryId,
    #[sqlx(rename = "judul")]
    pub title: String,
    #[sqlx(rename = "deskripsi")]
    pub description: Option<String>,
    #[sqlx(rename = "url_publikasi")]
    pub publication_url: String,
    #[sqlx(rename = "tanggal_publikasi")]
    pub publication_date: NaiveDate,
    pub status: ContentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for new content
#[derive(Debug, Clone, TypedBuilder)]
pub struct NewContent {
    #[builder(default)]
    pub id: ContentId,
    pub agency_id: AgencyId,
    pub publisher_id: UserId,
    pub category_id: CategoryId,
    #[builder(setter(into))]
    pub title: String,
    #[builder(default)]
    pub description: Option<String>,
    #[builder(setter(into))]
    pub publication_url: String,
    pub publication_date: NaiveDate,
    #[builder(default = ContentStatus::Draft)]
    pub status: ContentStatus,
}

/// Editable fields of existing content
#[derive(Debug, Clone)]
pub struct ContentChanges {
    pub category_id: CategoryId,
    pub title: String,
    pub description: Option<String>,
    pub publication_url: String,
    pub publication_date: NaiveDate,
}

/// One content row joined with its SKPD and category names (for listings/export)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContentListing {
    pub id: ContentId,
    pub agency_name: String,
    pub category_name: String,
    pub publisher_name: String,
    pub title: String,
    pub publication_url: String,
    pub publication_date: NaiveDate,
    pub status: ContentStatus,
}

impl Content {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.publisher_id == user_id
    }
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Content {
    pub async fn create<'e, E>(new: NewContent, executor: E) -> sqlx::Result<Self>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Content>(
            r#"
            INSERT INTO konten (
                id,
                skpd_id,
                publisher_id,
                kategori_id,
                judul,
                deskripsi,
                url_publikasi,
                tanggal_publikasi,
                status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(new.id)
        .bind(new.agency_id)
        .bind(new.publisher_id)
        .bind(new.category_id)
        .bind(new.title)
        .bind(new.description)
        .bind(new.publication_url)
        .bind(new.publication_date)
        .bind(new.status)
        .fetch_one(executor)
        .await
    }

    pub async fn find_by_id(id: ContentId, pool: &PgPool) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Content>("SELECT * FROM konten WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Like `find_by_id`, failing with `NotFound` when absent
    pub async fn get(id: ContentId, pool: &PgPool) -> Result<Self, WorkflowError> {
        Self::find_by_id(id, pool)
            .await?
            .ok_or_else(|| WorkflowError::not_found("content", id))
    }

    /// Load and row-lock content for a status change. Must run inside a transaction.
    pub async fn find_for_update<'e, E>(id: ContentId, executor: E) -> sqlx::Result<Option<Self>>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Content>("SELECT * FROM konten WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    pub async fn set_status<'e, E>(id: ContentId, status: ContentStatus, executor: E) -> sqlx::Result<Self>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Content>(
            r#"
            UPDATE konten
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_one(executor)
        .await
    }

    /// Overwrite editable fields and status together
    pub async fn update_details<'e, E>(
        id: ContentId,
        changes: ContentChanges,
        status: ContentStatus,
        executor: E,
    ) -> sqlx::Result<Self>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Content>(
            r#"
            UPDATE konten
            SET
                kategori_id = $2,
                judul = $3,
                deskripsi = $4,
                url_publikasi = $5,
                tanggal_publikasi = $6,
                status = $7,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.category_id)
        .bind(changes.title)
        .bind(changes.description)
        .bind(changes.publication_url)
        .bind(changes.publication_date)
        .bind(status)
        .fetch_one(executor)
        .await
    }

    /// Review queue, oldest submission first
    pub async fn find_pending(pool: &PgPool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Content>(
            "SELECT * FROM konten WHERE status = 'pending' ORDER BY updated_at ASC, id ASC",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_publisher(publisher_id: UserId, pool: &PgPool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Content>(
            "SELECT * FROM konten WHERE publisher_id = $1 ORDER BY created_at DESC",
        )
        .bind(publisher_id)
        .fetch_all(pool)
        .await
    }

    pub async fn count_by_agency(agency_id: AgencyId, pool: &PgPool) -> sqlx::Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM konten WHERE skpd_id = $1")
            .bind(agency_id)
            .fetch_one(pool)
            .await
    }

    /// Content published in the period, optionally restricted to one SKPD
    pub async fn list_in_period(
        agency_id: Option<AgencyId>,
        period: ReportPeriod,
        pool: &PgPool,
    ) -> Result<Vec<ContentListing>, WorkflowError> {
        let rows = sqlx::query_as::<_, ContentListing>(
            r#"
            SELECT
                k.id,
                s.nama AS agency_name,
                c.nama AS category_name,
                u.nama AS publisher_name,
                k.judul AS title,
                k.url_publikasi AS publication_url,
                k.tanggal_publikasi AS publication_date,
                k.status
            FROM konten k
            JOIN skpd s ON s.id = k.skpd_id
            JOIN kategori c ON c.id = k.kategori_id
            JOIN users u ON u.id = k.publisher_id
            WHERE k.tanggal_publikasi >= $1
              AND k.tanggal_publikasi < $2
              AND ($3::uuid IS NULL OR k.skpd_id = $3)
            ORDER BY s.nama, k.tanggal_publikasi, k.judul
            "#,
        )
        .bind(period.first_day())
        .bind(period.end_exclusive()?)
        .bind(agency_id)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }
}
