//! Content lifecycle state machine
//!
//! Pure decision logic - NO IO. Every status change in the crate goes through
//! `ContentStatus::apply`, which holds the single transition table.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Lifecycle status of a content item (Postgres enum `konten_status`)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, juniper::GraphQLEnum,
)]
#[sqlx(type_name = "konten_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ContentStatus {
    Draft,
    Pending,
    Approved,
    Rejected,
    Published,
}

/// Operations that move content between statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentTransition {
    /// Publisher sends a draft for review
    Submit,
    /// Operator accepts pending content
    Approve,
    /// Operator refuses pending content
    Reject,
    /// Publisher edits rejected content and sends it back
    Resubmit,
    /// Approved content goes live
    Publish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot {transition} content in {from} status")]
pub struct InvalidTransition {
    pub from: ContentStatus,
    pub transition: ContentTransition,
}

impl ContentStatus {
    pub const ALL: [ContentStatus; 5] = [
        ContentStatus::Draft,
        ContentStatus::Pending,
        ContentStatus::Approved,
        ContentStatus::Rejected,
        ContentStatus::Published,
    ];

    /// Status for newly created content.
    pub fn initial(submit: bool) -> Self {
        if submit {
            ContentStatus::Pending
        } else {
            ContentStatus::Draft
        }
    }

    /// The transition table.
    pub fn apply(self, transition: ContentTransition) -> Result<ContentStatus, InvalidTransition> {
        use ContentStatus::*;
        use ContentTransition as T;

        match (self, transition) {
            (Draft, T::Submit) => Ok(Pending),
            (Pending, T::Approve) => Ok(Approved),
            (Pending, T::Reject) => Ok(Rejected),
            (Rejected, T::Resubmit) => Ok(Pending),
            (Approved, T::Publish) => Ok(Published),
            (from, transition) => Err(InvalidTransition { from, transition }),
        }
    }

    /// Whether the owning publisher may still change the content.
    pub fn is_editable(self) -> bool {
        matches!(self, ContentStatus::Draft | ContentStatus::Rejected)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Draft => "draft",
            ContentStatus::Pending => "pending",
            ContentStatus::Approved => "approved",
            ContentStatus::Rejected => "rejected",
            ContentStatus::Published => "published",
        }
    }

    /// Label shown to end users and in exports.
    pub fn label(&self) -> &'static str {
        match self {
            ContentStatus::Draft => "Draft",
            ContentStatus::Pending => "Menunggu Verifikasi",
            ContentStatus::Approved => "Disetujui",
            ContentStatus::Rejected => "Ditolak",
            ContentStatus::Published => "Dipublikasikan",
        }
    }
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContentStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        ContentStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Invalid content status: {}", s))
    }
}

impl fmt::Display for ContentTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            ContentTransition::Submit => "submit",
            ContentTransition::Approve => "approve",
            ContentTransition::Reject => "reject",
            ContentTransition::Resubmit => "resubmit",
            ContentTransition::Publish => "publish",
        };
        f.write_str(verb)
    }
}
