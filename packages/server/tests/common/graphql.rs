//! GraphQL client for integration testing.
//!
//! Executes GraphQL queries directly against the schema without HTTP overhead.

use juniper::Variables;
use publikasi_core::common::Actor;
use publikasi_core::kernel::ServerDeps;
use publikasi_core::server::graphql::{create_schema, GraphQLContext, Schema};
use serde_json::Value;
use std::sync::Arc;

/// GraphQL client for executing queries and mutations in tests.
pub struct GraphQLClient {
    schema: Schema,
    context: GraphQLContext,
}

/// One GraphQL error with its `code` extension, if any
#[derive(Debug, Clone)]
pub struct GraphQLErrorInfo {
    pub message: String,
    pub code: Option<String>,
}

/// Result of a GraphQL execution.
#[derive(Debug)]
pub struct GraphQLResult {
    pub data: Option<Value>,
    pub errors: Vec<GraphQLErrorInfo>,
}

impl GraphQLResult {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Unwraps the data, panicking if there were errors.
    pub fn unwrap(self) -> Value {
        if !self.errors.is_empty() {
            panic!("GraphQL errors: {:?}", self.errors);
        }
        self.data.expect("No data returned")
    }

    /// Code of the first error
    pub fn error_code(&self) -> Option<&str> {
        self.errors.first().and_then(|e| e.code.as_deref())
    }
}

impl GraphQLClient {
    pub fn for_actor(deps: ServerDeps, actor: Actor) -> Self {
        Self {
            schema: create_schema(),
            context: GraphQLContext::for_actor(Arc::new(deps), actor),
        }
    }

    pub fn anonymous(deps: ServerDeps) -> Self {
        Self {
            schema: create_schema(),
            context: GraphQLContext::anonymous(Arc::new(deps)),
        }
    }

    pub async fn execute(&self, query: &str) -> GraphQLResult {
        self.execute_with_vars(query, Variables::new()).await
    }

    pub async fn execute_with_vars(&self, query: &str, variables: Variables) -> GraphQLResult {
        let (result, errors) =
            juniper::execute(query, None, &self.schema, &variables, &self.context)
                .await
                .expect("GraphQL execution failed");

        let data = Some(serde_json::to_value(&result).expect("Failed to serialize GraphQL result"));

        let errors = errors
            .iter()
            .map(|e| {
                let extensions =
                    serde_json::to_value(e.error().extensions()).unwrap_or(Value::Null);
                GraphQLErrorInfo {
                    message: e.error().message().to_string(),
                    code: extensions
                        .get("code")
                        .and_then(Value::as_str)
                        .map(str::to_string),
                }
            })
            .collect();

        GraphQLResult { data, errors }
    }

    /// Execute a query and expect success, returning the data.
    pub async fn query(&self, query: &str) -> Value {
        self.execute(query).await.unwrap()
    }
}
