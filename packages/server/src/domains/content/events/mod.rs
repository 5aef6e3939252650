//! Content domain events
//!
//! Events are immutable facts emitted by actions after their transaction
//! commits. The notification collaborator consumes them.

use serde::{Deserialize, Serialize};

use super::models::ContentStatus;
use crate::common::{ContentId, UserId, VerificationId};
use crate::kernel::ContentNotification;

/// Content domain events - fact events only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContentEvent {
    /// New content was stored (as draft or directly pending)
    ContentCreated {
        content_id: ContentId,
        publisher_id: UserId,
        status: ContentStatus,
    },

    /// A draft was sent for review
    ContentSubmitted {
        content_id: ContentId,
        publisher_id: UserId,
    },

    /// Operator approved pending content
    ContentApproved {
        content_id: ContentId,
        verification_id: VerificationId,
        operator_id: UserId,
        publisher_id: UserId,
    },

    /// Operator rejected pending content
    ContentRejected {
        content_id: ContentId,
        verification_id: VerificationId,
        operator_id: UserId,
        publisher_id: UserId,
        reason: String,
    },

    /// Rejected content was edited and went back to review
    ContentResubmitted {
        content_id: ContentId,
        publisher_id: UserId,
    },

    /// Draft or rejected content was edited without a status change
    ContentEdited { content_id: ContentId },
}

impl ContentEvent {
    /// Notification owed for this event, if any.
    ///
    /// Decisions notify the publisher; a resubmission notifies reviewers on
    /// behalf of the publisher. Creation, plain submission and edits are silent.
    pub fn notification(&self) -> Option<ContentNotification> {
        match self {
            ContentEvent::ContentApproved {
                content_id,
                publisher_id,
                ..
            } => Some(ContentNotification {
                content_id: *content_id,
                status: ContentStatus::Approved,
                user_id: *publisher_id,
            }),
            ContentEvent::ContentRejected {
                content_id,
                publisher_id,
                ..
            } => Some(ContentNotification {
                content_id: *content_id,
                status: ContentStatus::Rejected,
                user_id: *publisher_id,
            }),
            ContentEvent::ContentResubmitted {
                content_id,
                publisher_id,
            } => Some(ContentNotification {
                content_id: *content_id,
                status: ContentStatus::Pending,
                user_id: *publisher_id,
            }),
            ContentEvent::ContentCreated { .. }
            | ContentEvent::ContentSubmitted { .. }
            | ContentEvent::ContentEdited { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decisions_notify_the_publisher() {
        let publisher_id = UserId::new();
        let content_id = ContentId::new();
        let event = ContentEvent::ContentRejected {
            content_id,
            verification_id: VerificationId::new(),
            operator_id: UserId::new(),
            publisher_id,
            reason: "Tautan tidak dapat dibuka".to_string(),
        };

        let notification = event.notification().unwrap();
        assert_eq!(notification.content_id, content_id);
        assert_eq!(notification.user_id, publisher_id);
        assert_eq!(notification.status, ContentStatus::Rejected);
    }

    #[test]
    fn plain_submission_is_silent() {
        let event = ContentEvent::ContentSubmitted {
            content_id: ContentId::new(),
            publisher_id: UserId::new(),
        };
        assert!(event.notification().is_none());
    }
}
