use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use juniper::http::{GraphQLBatchRequest, GraphQLRequest};
use std::sync::Arc;
use tracing::debug;

use crate::server::graphql::{GraphQLContext, Schema};

/// POST /graphql
pub async fn graphql_handler(
    State(schema): State<Arc<Schema>>,
    Extension(context): Extension<GraphQLContext>,
    Json(request): Json<GraphQLRequest>,
) -> Response {
    debug!(operation = ?request.operation_name, "GraphQL request");

    let response = request.execute(&schema, &context).await;
    let status = if response.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    (status, Json(response)).into_response()
}

/// POST /graphql/batch
pub async fn graphql_batch_handler(
    State(schema): State<Arc<Schema>>,
    Extension(context): Extension<GraphQLContext>,
    Json(batch): Json<GraphQLBatchRequest>,
) -> Response {
    let response = batch.execute(&schema, &context).await;
    let status = if response.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    (status, Json(response)).into_response()
}

/// GET /graphql - GraphiQL, debug builds only
pub async fn graphql_playground() -> Html<String> {
    Html(juniper::http::graphiql::graphiql_source("/graphql", None))
}
