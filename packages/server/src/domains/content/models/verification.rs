use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, PgPool};
use std::fmt;
use typed_builder::TypedBuilder;

use super::status::ContentTransition;
use crate::common::{ContentId, UserId, VerificationId};

/// Operator decision recorded in the audit trail (Postgres enum `verifikasi_keputusan`)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, juniper::GraphQLEnum,
)]
#[sqlx(type_name = "verifikasi_keputusan", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum VerificationDecision {
    Approved,
    Rejected,
}

impl VerificationDecision {
    /// Lifecycle transition this decision drives.
    pub fn transition(self) -> ContentTransition {
        match self {
            VerificationDecision::Approved => ContentTransition::Approve,
            VerificationDecision::Rejected => ContentTransition::Reject,
        }
    }
}

impl fmt::Display for VerificationDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationDecision::Approved => write!(f, "approved"),
            VerificationDecision::Rejected => write!(f, "rejected"),
        }
    }
}

/// Verification - one immutable approve/reject decision on a content item
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Verification {
    pub id: VerificationId,
    #[sqlx(rename = "konten_id")]
    pub content_id: ContentId,
    pub operator_id: UserId,
    #[sqlx(rename = "keputusan")]
    pub decision: VerificationDecision,
    #[sqlx(rename = "alasan")]
    pub reason: Option<String>,
    pub verified_at: DateTime<Utc>,
}

/// Insert payload for a verification record
#[derive(Debug, Clone, TypedBuilder)]
pub struct NewVerification {
    #[builder(default)]
    pub id: VerificationId,
    pub content_id: ContentId,
    pub operator_id: UserId,
    pub decision: VerificationDecision,
    #[builder(default)]
    pub reason: Option<String>,
}

// =============================================================================
// SQL Queries - append-only: there is no update or delete
// =============================================================================

impl Verification {
    /// Insert a decision. Callers run this inside the same transaction as the
    /// status change.
    pub async fn create<'e, E>(new: NewVerification, executor: E) -> sqlx::Result<Self>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Verification>(
            r#"
            INSERT INTO verifikasi_konten (id, konten_id, operator_id, keputusan, alasan)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(new.id)
        .bind(new.content_id)
        .bind(new.operator_id)
        .bind(new.decision)
        .bind(new.reason)
        .fetch_one(executor)
        .await
    }

    /// Decision history for a content item, newest first
    pub async fn find_by_content(content_id: ContentId, pool: &PgPool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Verification>(
            r#"
            SELECT * FROM verifikasi_konten
            WHERE konten_id = $1
            ORDER BY verified_at DESC, id DESC
            "#,
        )
        .bind(content_id)
        .fetch_all(pool)
        .await
    }

    /// Latest decision for a content item, if any
    pub async fn find_latest(content_id: ContentId, pool: &PgPool) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Verification>(
            r#"
            SELECT * FROM verifikasi_konten
            WHERE konten_id = $1
            ORDER BY verified_at DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(content_id)
        .fetch_optional(pool)
        .await
    }

    pub async fn count_by_content(content_id: ContentId, pool: &PgPool) -> sqlx::Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM verifikasi_konten WHERE konten_id = $1")
            .bind(content_id)
            .fetch_one(pool)
            .await
    }
}
