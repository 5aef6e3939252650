//! Test harness with testcontainers for integration testing.
//!
//! Uses one shared Postgres container across all tests. The container and
//! migrations are initialized on the first test, then reused. Tests share the
//! database, so every fixture uses unique names and assertions only look at
//! rows the test created.

use anyhow::{Context, Result};
use publikasi_core::common::Actor;
use publikasi_core::kernel::{MockNotifier, ServerDeps, TestDependencies};
use sqlx::PgPool;
use std::sync::Arc;
use test_context::AsyncTestContext;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

use super::GraphQLClient;

/// Shared test infrastructure that persists across all tests.
struct SharedTestInfra {
    db_url: String,
    // Keep the container alive for the entire test run
    _postgres: ContainerAsync<Postgres>,
}

/// Global shared infrastructure - initialized once, reused by all tests.
static SHARED_INFRA: OnceCell<SharedTestInfra> = OnceCell::const_new();

impl SharedTestInfra {
    async fn init() -> Result<Self> {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let postgres = Postgres::default()
            .with_tag("16")
            .with_cmd(["-c", "max_connections=200"])
            .start()
            .await
            .context("Failed to start Postgres container")?;

        let pg_host = postgres.get_host().await?;
        let pg_port = postgres.get_host_port_ipv4(5432).await?;
        let db_url = format!(
            "postgresql://postgres:postgres@{}:{}/postgres",
            pg_host, pg_port
        );

        let pool = PgPool::connect(&db_url)
            .await
            .context("Failed to connect to Postgres for migrations")?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;

        Ok(Self {
            db_url,
            _postgres: postgres,
        })
    }

    async fn get() -> &'static Self {
        SHARED_INFRA
            .get_or_init(|| async {
                Self::init()
                    .await
                    .expect("Failed to initialize shared test infrastructure")
            })
            .await
    }
}

/// Test harness: a fresh pool plus server dependencies with a recording notifier.
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let world = World::new(&ctx.db_pool).await;
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    pub db_pool: PgPool,
    pub notifier: Arc<MockNotifier>,
    pub deps: ServerDeps,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new().await.expect("Failed to create test harness")
    }

    async fn teardown(self) {
        self.db_pool.close().await;
    }
}

impl TestHarness {
    pub async fn new() -> Result<Self> {
        Self::with_notifier(MockNotifier::new()).await
    }

    /// Harness whose notifier fails every delivery
    pub async fn with_failing_notifier() -> Result<Self> {
        Self::with_notifier(MockNotifier::failing()).await
    }

    async fn with_notifier(notifier: MockNotifier) -> Result<Self> {
        let infra = SharedTestInfra::get().await;

        let db_pool = PgPool::connect(&infra.db_url)
            .await
            .context("Failed to connect to test database")?;

        let TestDependencies { notifier, deps } = TestDependencies::with_notifier(db_pool.clone(), notifier);

        Ok(Self {
            db_pool,
            notifier,
            deps,
        })
    }

    /// GraphQL client acting as the given user
    pub fn graphql_as(&self, actor: Actor) -> GraphQLClient {
        GraphQLClient::for_actor(self.deps.clone(), actor)
    }

    /// GraphQL client without credentials
    pub fn graphql_anonymous(&self) -> GraphQLClient {
        GraphQLClient::anonymous(self.deps.clone())
    }
}
