//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::{Extension, Request},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::common::{Actor, AuthError};
use crate::domains::auth::JwtService;
use crate::domains::user::actions::resolve_actor;
use crate::kernel::{ServerDeps, TracingNotifier};
use crate::server::graphql::{create_schema, GraphQLContext};
use crate::server::middleware::{jwt_auth_middleware, AuthUser};
use crate::server::routes::{
    export_compliance_handler, export_contents_handler, graphql_batch_handler, graphql_handler,
    graphql_playground, health_handler,
};
use crate::Config;

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub db_pool: PgPool,
    pub server_deps: Arc<ServerDeps>,
    pub jwt_service: Arc<JwtService>,
}

/// Turn the token's user into an actor using the stored user row.
pub async fn authenticate(auth_user: Option<&AuthUser>, pool: &PgPool) -> Result<Actor, AuthError> {
    match auth_user {
        Some(user) => resolve_actor(user.user_id, pool).await,
        None => Err(AuthError::AuthenticationRequired),
    }
}

/// Middleware to create GraphQLContext per-request
async fn create_graphql_context(
    Extension(state): Extension<AxumAppState>,
    mut request: Request,
    next: Next,
) -> Response {
    // Populated by jwt_auth_middleware
    let auth_user = request.extensions().get::<AuthUser>().cloned();
    let actor = authenticate(auth_user.as_ref(), &state.db_pool).await;

    let context = GraphQLContext::new(state.server_deps.clone(), actor);
    request.extensions_mut().insert(context);

    next.run(request).await
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(origins))
}

/// Build the Axum application router from configuration
pub fn build_app(pool: PgPool, config: &Config) -> Router {
    let server_deps = ServerDeps::new(
        pool.clone(),
        Arc::new(TracingNotifier::new()),
        config.default_monthly_quota,
    );
    let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_issuer.clone());

    build_router(server_deps, jwt_service, &config.allowed_origins)
}

/// Build the router around prepared dependencies
pub fn build_router(
    server_deps: ServerDeps,
    jwt_service: JwtService,
    allowed_origins: &[String],
) -> Router {
    let schema = Arc::new(create_schema());
    let jwt_service = Arc::new(jwt_service);

    let app_state = AxumAppState {
        db_pool: server_deps.db_pool.clone(),
        server_deps: Arc::new(server_deps),
        jwt_service: jwt_service.clone(),
    };

    let mut router = Router::new()
        .route("/graphql", post(graphql_handler))
        .route("/graphql/batch", post(graphql_batch_handler));

    // GraphQL playground only in debug builds (development)
    #[cfg(debug_assertions)]
    {
        router = router.route("/graphql", get(graphql_playground));
    }

    router
        .route("/export/compliance", get(export_compliance_handler))
        .route("/export/contents", get(export_contents_handler))
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(create_graphql_context))
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service.clone(), req, next)
        }))
        .layer(Extension(app_state))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}
