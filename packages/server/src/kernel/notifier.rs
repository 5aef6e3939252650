//! Default notification collaborator: structured log lines only.

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use super::{BaseNotifier, ContentNotification};

/// Notifier that records each notification as a tracing event
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BaseNotifier for TracingNotifier {
    async fn notify(&self, notification: ContentNotification) -> Result<()> {
        info!(
            content_id = %notification.content_id,
            status = %notification.status,
            user_id = %notification.user_id,
            "Content notification"
        );
        Ok(())
    }
}
