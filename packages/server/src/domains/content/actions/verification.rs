//! Operator verification: approve or reject pending content
//!
//! The status change and its verification record are written in one
//! transaction while the content row is locked. Notifications go out only
//! after commit.

use tracing::info;

use crate::common::{Actor, Capability, ContentId, WorkflowError};
use crate::domains::content::events::ContentEvent;
use crate::domains::content::models::{
    Content, NewVerification, Verification, VerificationDecision,
};
use crate::kernel::ServerDeps;

pub const REJECTION_REASON_MIN_CHARS: usize = 10;
pub const REASON_MAX_CHARS: usize = 1000;

/// Content after a decision, with the record that decision produced
#[derive(Debug, Clone)]
pub struct VerificationOutcome {
    pub content: Content,
    pub verification: Verification,
}

/// Approve pending content (Pending → Approved)
pub async fn approve_content(
    actor: &Actor,
    content_id: ContentId,
    reason: Option<String>,
    deps: &ServerDeps,
) -> Result<VerificationOutcome, WorkflowError> {
    actor.can(Capability::VerifyContent).check()?;
    let reason = approval_note(reason)?;

    info!(content_id = %content_id, operator_id = %actor.user_id, "Approving content");

    let outcome = record_decision(actor, content_id, VerificationDecision::Approved, reason, deps).await?;

    deps.dispatch(&ContentEvent::ContentApproved {
        content_id,
        verification_id: outcome.verification.id,
        operator_id: actor.user_id,
        publisher_id: outcome.content.publisher_id,
    })
    .await;

    Ok(outcome)
}

/// Reject pending content (Pending → Rejected). A reason is mandatory.
pub async fn reject_content(
    actor: &Actor,
    content_id: ContentId,
    reason: String,
    deps: &ServerDeps,
) -> Result<VerificationOutcome, WorkflowError> {
    actor.can(Capability::VerifyContent).check()?;
    let reason = rejection_reason(&reason)?;

    info!(content_id = %content_id, operator_id = %actor.user_id, reason = %reason, "Rejecting content");

    let outcome = record_decision(
        actor,
        content_id,
        VerificationDecision::Rejected,
        Some(reason.clone()),
        deps,
    )
    .await?;

    deps.dispatch(&ContentEvent::ContentRejected {
        content_id,
        verification_id: outcome.verification.id,
        operator_id: actor.user_id,
        publisher_id: outcome.content.publisher_id,
        reason,
    })
    .await;

    Ok(outcome)
}

async fn record_decision(
    actor: &Actor,
    content_id: ContentId,
    decision: VerificationDecision,
    reason: Option<String>,
    deps: &ServerDeps,
) -> Result<VerificationOutcome, WorkflowError> {
    let mut tx = deps.db_pool.begin().await?;

    let current = Content::find_for_update(content_id, &mut *tx)
        .await?
        .ok_or_else(|| WorkflowError::not_found("content", content_id))?;

    // Dropping `tx` on any early return rolls back.
    let next = current
        .status
        .apply(decision.transition())
        .map_err(|_| WorkflowError::invalid_state("only Pending content can be verified"))?;

    let content = Content::set_status(content_id, next, &mut *tx).await?;
    let verification = Verification::create(
        NewVerification::builder()
            .content_id(content_id)
            .operator_id(actor.user_id)
            .decision(decision)
            .reason(reason)
            .build(),
        &mut *tx,
    )
    .await?;

    tx.commit().await?;

    info!(
        content_id = %content_id,
        verification_id = %verification.id,
        decision = %decision,
        "Verification recorded"
    );

    Ok(VerificationOutcome {
        content,
        verification,
    })
}

/// Optional approval note; blank means none.
pub fn approval_note(reason: Option<String>) -> Result<Option<String>, WorkflowError> {
    let Some(reason) = reason else {
        return Ok(None);
    };
    let reason = reason.trim();
    if reason.is_empty() {
        return Ok(None);
    }
    if reason.chars().count() > REASON_MAX_CHARS {
        return Err(WorkflowError::validation(format!(
            "reason must be at most {} characters",
            REASON_MAX_CHARS
        )));
    }
    Ok(Some(reason.to_string()))
}

pub fn rejection_reason(reason: &str) -> Result<String, WorkflowError> {
    let reason = reason.trim();
    let length = reason.chars().count();
    if length < REJECTION_REASON_MIN_CHARS {
        return Err(WorkflowError::validation(format!(
            "rejection reason must be at least {} characters",
            REJECTION_REASON_MIN_CHARS
        )));
    }
    if length > REASON_MAX_CHARS {
        return Err(WorkflowError::validation(format!(
            "rejection reason must be at most {} characters",
            REASON_MAX_CHARS
        )));
    }
    Ok(reason.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Role, UserId};

    #[test]
    fn rejection_reason_needs_ten_characters() {
        assert!(matches!(
            rejection_reason("too short"),
            Err(WorkflowError::Validation(_))
        ));
        assert_eq!(rejection_reason("ten chars!").unwrap(), "ten chars!");
    }

    #[test]
    fn rejection_reason_is_trimmed_before_counting() {
        assert!(rejection_reason("   short     ").is_err());
        assert_eq!(
            rejection_reason("  Foto buram, mohon ganti  ").unwrap(),
            "Foto buram, mohon ganti"
        );
    }

    #[test]
    fn reasons_are_capped() {
        let max = "x".repeat(REASON_MAX_CHARS);
        assert!(rejection_reason(&max).is_ok());
        assert!(rejection_reason(&format!("{}x", max)).is_err());
        assert!(approval_note(Some(format!("{}x", max))).is_err());
    }

    #[test]
    fn approval_note_is_optional() {
        assert_eq!(approval_note(None).unwrap(), None);
        assert_eq!(approval_note(Some("   ".into())).unwrap(), None);
        assert_eq!(
            approval_note(Some("Looks good".into())).unwrap(),
            Some("Looks good".to_string())
        );
    }

    #[tokio::test]
    async fn publishers_are_refused_before_any_database_access() {
        let publisher = Actor::new(UserId::new(), Role::Publisher, Some(crate::common::AgencyId::new()));
        // A lazy pool never connects, so reaching the database would fail differently.
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://nobody@localhost:1/none")
            .unwrap();
        let deps = crate::kernel::TestDependencies::new(pool).deps;

        let result = approve_content(&publisher, ContentId::new(), None, &deps).await;
        assert!(matches!(result, Err(WorkflowError::Authorization(_))));
    }
}
