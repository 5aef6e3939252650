// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::{Arc, Mutex};

use super::{BaseNotifier, ContentNotification, ServerDeps};
use crate::common::ContentId;

// =============================================================================
// Mock Notifier
// =============================================================================

/// Notifier that records every call; optionally fails to exercise error paths
#[derive(Default)]
pub struct MockNotifier {
    sent: Arc<Mutex<Vec<ContentNotification>>>,
    fail: bool,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose deliveries always error
    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    /// All notifications received so far
    pub fn sent(&self) -> Vec<ContentNotification> {
        self.sent.lock().unwrap().clone()
    }

    /// Notifications received for one content item
    pub fn sent_for(&self, content_id: ContentId) -> Vec<ContentNotification> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.content_id == content_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl BaseNotifier for MockNotifier {
    async fn notify(&self, notification: ContentNotification) -> Result<()> {
        self.sent.lock().unwrap().push(notification);
        if self.fail {
            anyhow::bail!("mock notifier configured to fail");
        }
        Ok(())
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Bundle of mocks plus the ServerDeps built from them
pub struct TestDependencies {
    pub notifier: Arc<MockNotifier>,
    pub deps: ServerDeps,
}

impl TestDependencies {
    pub fn new(db_pool: PgPool) -> Self {
        Self::with_notifier(db_pool, MockNotifier::new())
    }

    pub fn with_notifier(db_pool: PgPool, notifier: MockNotifier) -> Self {
        let notifier = Arc::new(notifier);
        let deps = ServerDeps::new(db_pool, notifier.clone(), 3);
        Self { notifier, deps }
    }
}
