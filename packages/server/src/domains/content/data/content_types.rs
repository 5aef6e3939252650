//! GraphQL data types for content and its verification trail

use chrono::{DateTime, NaiveDate, Utc};
use juniper::{FieldResult, GraphQLInputObject, GraphQLObject};
use uuid::Uuid;

use crate::domains::content::models::{
    Content, ContentStatus, Verification, VerificationDecision,
};
use crate::server::graphql::context::GraphQLContext;

/// Create/edit payload from publishers
#[derive(Debug, Clone, GraphQLInputObject)]
pub struct ContentInput {
    pub category_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub publication_url: String,
    pub publication_date: NaiveDate,
}

/// GraphQL type for Content
#[derive(Debug, Clone)]
pub struct ContentData {
    pub id: Uuid,
    pub agency_id: Uuid,
    pub publisher_id: Uuid,
    pub category_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub publication_url: String,
    pub publication_date: NaiveDate,
    pub status: ContentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Content> for ContentData {
    fn from(content: Content) -> Self {
        Self {
            id: content.id.into_uuid(),
            agency_id: content.agency_id.into_uuid(),
            publisher_id: content.publisher_id.into_uuid(),
            category_id: content.category_id.into_uuid(),
            title: content.title,
            description: content.description,
            publication_url: content.publication_url,
            publication_date: content.publication_date,
            status: content.status,
            created_at: content.created_at,
            updated_at: content.updated_at,
        }
    }
}

#[juniper::graphql_object(context = GraphQLContext)]
impl ContentData {
    fn id(&self) -> Uuid {
        self.id
    }

    fn agency_id(&self) -> Uuid {
        self.agency_id
    }

    fn publisher_id(&self) -> Uuid {
        self.publisher_id
    }

    fn category_id(&self) -> Uuid {
        self.category_id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn publication_url(&self) -> &str {
        &self.publication_url
    }

    fn publication_date(&self) -> NaiveDate {
        self.publication_date
    }

    fn status(&self) -> ContentStatus {
        self.status
    }

    /// Indonesian display label for the status
    fn status_label(&self) -> &str {
        self.status.label()
    }

    fn editable(&self) -> bool {
        self.status.is_editable()
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Decision history, newest first
    async fn verifications(&self, ctx: &GraphQLContext) -> FieldResult<Vec<VerificationData>> {
        let records = Verification::find_by_content(self.id.into(), &ctx.deps.db_pool).await?;
        Ok(records.into_iter().map(VerificationData::from).collect())
    }
}

/// GraphQL type for one verification decision
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(context = GraphQLContext)]
pub struct VerificationData {
    pub id: Uuid,
    pub content_id: Uuid,
    pub operator_id: Uuid,
    pub decision: VerificationDecision,
    pub reason: Option<String>,
    pub verified_at: DateTime<Utc>,
}

impl From<Verification> for VerificationData {
    fn from(record: Verification) -> Self {
        Self {
            id: record.id.into_uuid(),
            content_id: record.content_id.into_uuid(),
            operator_id: record.operator_id.into_uuid(),
            decision: record.decision,
            reason: record.reason,
            verified_at: record.verified_at,
        }
    }
}

/// Result of an approve/reject mutation
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(context = GraphQLContext)]
pub struct VerificationResult {
    pub content: ContentData,
    pub verification: VerificationData,
}
