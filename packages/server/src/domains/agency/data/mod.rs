//! SKPD GraphQL types

use chrono::{DateTime, Utc};
use juniper::{GraphQLInputObject, GraphQLObject};
use uuid::Uuid;

use crate::domains::agency::models::{Agency, AgencyStatus};
use crate::server::graphql::context::GraphQLContext;

#[derive(Debug, Clone, GraphQLInputObject)]
pub struct AgencyInput {
    pub name: String,
    /// Falls back to the configured default on create, or the current quota on update
    pub monthly_quota: Option<i32>,
}

#[derive(Debug, Clone, GraphQLObject)]
#[graphql(context = GraphQLContext)]
pub struct AgencyData {
    pub id: Uuid,
    pub name: String,
    pub monthly_quota: i32,
    pub status: AgencyStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Agency> for AgencyData {
    fn from(agency: Agency) -> Self {
        Self {
            id: agency.id.into_uuid(),
            name: agency.name,
            monthly_quota: agency.monthly_quota,
            status: agency.status,
            created_at: agency.created_at,
            updated_at: agency.updated_at,
        }
    }
}
