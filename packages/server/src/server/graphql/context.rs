use juniper::FieldResult;
use std::sync::Arc;

use crate::common::{Actor, AuthError};
use crate::kernel::ServerDeps;

/// GraphQL request context
///
/// Built once per request after the JWT middleware ran. `actor` holds the
/// authenticated user, or the reason there is none.
#[derive(Clone)]
pub struct GraphQLContext {
    pub deps: Arc<ServerDeps>,
    actor: Result<Actor, AuthError>,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(deps: Arc<ServerDeps>, actor: Result<Actor, AuthError>) -> Self {
        Self { deps, actor }
    }

    /// Context for an already-resolved actor
    pub fn for_actor(deps: Arc<ServerDeps>, actor: Actor) -> Self {
        Self::new(deps, Ok(actor))
    }

    /// Context for an unauthenticated request
    pub fn anonymous(deps: Arc<ServerDeps>) -> Self {
        Self::new(deps, Err(AuthError::AuthenticationRequired))
    }

    /// The authenticated actor, or an UNAUTHENTICATED field error
    pub fn actor(&self) -> FieldResult<&Actor> {
        self.actor.as_ref().map_err(|e| {
            juniper::FieldError::new(
                e.to_string(),
                juniper::graphql_value!({ "code": "UNAUTHENTICATED" }),
            )
        })
    }
}
