use chrono::{DateTime, Utc};
use juniper::{GraphQLInputObject, GraphQLObject};
use uuid::Uuid;

use crate::domains::category::models::Category;
use crate::server::graphql::context::GraphQLContext;

#[derive(Debug, Clone, GraphQLInputObject)]
pub struct CategoryInput {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, GraphQLObject)]
#[graphql(context = GraphQLContext)]
pub struct CategoryData {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryData {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into_uuid(),
            name: category.name,
            description: category.description,
            is_active: category.is_active,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}
