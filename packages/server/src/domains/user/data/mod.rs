use chrono::{DateTime, Utc};
use juniper::{GraphQLInputObject, GraphQLObject};
use uuid::Uuid;

use crate::common::Role;
use crate::domains::user::models::User;
use crate::server::graphql::context::GraphQLContext;

#[derive(Debug, Clone, GraphQLInputObject)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Required for publishers, must be empty otherwise
    pub agency_id: Option<Uuid>,
}

#[derive(Debug, Clone, GraphQLObject)]
#[graphql(context = GraphQLContext)]
pub struct UserData {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub agency_id: Option<Uuid>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserData {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into_uuid(),
            name: user.name,
            email: user.email,
            role: user.role,
            agency_id: user.agency_id.map(|id| id.into_uuid()),
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}
