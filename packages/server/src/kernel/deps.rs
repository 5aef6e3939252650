//! Server dependencies for actions (using traits for testability)
//!
//! This module provides the central dependency container used by all domain actions.

use sqlx::PgPool;
use std::sync::Arc;
use tracing::warn;

use crate::domains::content::events::ContentEvent;
use crate::kernel::BaseNotifier;

/// Server dependencies accessible to actions
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    pub notifier: Arc<dyn BaseNotifier>,
    /// Quota assigned to new SKPDs when none is given
    pub default_monthly_quota: i32,
}

impl ServerDeps {
    pub fn new(db_pool: PgPool, notifier: Arc<dyn BaseNotifier>, default_monthly_quota: i32) -> Self {
        Self {
            db_pool,
            notifier,
            default_monthly_quota,
        }
    }

    /// Hand an event's notification (if it carries one) to the notifier.
    ///
    /// Runs after commit; a delivery failure is logged, not returned.
    pub async fn dispatch(&self, event: &ContentEvent) {
        let Some(notification) = event.notification() else {
            return;
        };

        let content_id = notification.content_id;
        if let Err(e) = self.notifier.notify(notification).await {
            warn!(content_id = %content_id, error = %e, "Failed to deliver content notification");
        }
    }
}
