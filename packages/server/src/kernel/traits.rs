// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Naming convention: Base* for trait names (e.g., BaseNotifier)

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::common::{ContentId, UserId};
use crate::domains::content::models::ContentStatus;

// =============================================================================
// Notification Trait (Infrastructure)
// =============================================================================

/// Payload handed to the notification collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentNotification {
    pub content_id: ContentId,
    /// Status the content moved into
    pub status: ContentStatus,
    /// User the notification concerns (the content's publisher)
    pub user_id: UserId,
}

#[async_trait]
pub trait BaseNotifier: Send + Sync {
    /// Deliver one notification. Delivery failures never undo the transition
    /// that caused them.
    async fn notify(&self, notification: ContentNotification) -> Result<()>;
}
