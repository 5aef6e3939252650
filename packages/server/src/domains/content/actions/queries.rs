//! Read-side content actions

use crate::common::{Actor, Capability, ContentId, ReportPeriod, WorkflowError};
use crate::domains::content::models::{Content, ContentListing, Verification};
use crate::kernel::ServerDeps;

/// Review queue for operators, oldest submission first
pub async fn pending_contents(actor: &Actor, deps: &ServerDeps) -> Result<Vec<Content>, WorkflowError> {
    actor.can(Capability::VerifyContent).check()?;
    Ok(Content::find_pending(&deps.db_pool).await?)
}

/// Everything the publisher has created, newest first
pub async fn my_contents(actor: &Actor, deps: &ServerDeps) -> Result<Vec<Content>, WorkflowError> {
    actor.can(Capability::SubmitContent).check()?;
    Ok(Content::find_by_publisher(actor.user_id, &deps.db_pool).await?)
}

/// Single content item. Publishers only see their own SKPD's content.
pub async fn content_detail(
    actor: &Actor,
    content_id: ContentId,
    deps: &ServerDeps,
) -> Result<Content, WorkflowError> {
    let content = Content::get(content_id, &deps.db_pool).await?;
    actor.can_read_agency(content.agency_id)?;
    Ok(content)
}

/// Verification trail for a content item, newest first
pub async fn verification_history(
    actor: &Actor,
    content_id: ContentId,
    deps: &ServerDeps,
) -> Result<Vec<Verification>, WorkflowError> {
    let content = content_detail(actor, content_id, deps).await?;
    Ok(Verification::find_by_content(content.id, &deps.db_pool).await?)
}

/// Content dated in the period. Cross-SKPD viewers get every SKPD; publishers
/// only their own.
pub async fn content_listing(
    actor: &Actor,
    period: ReportPeriod,
    deps: &ServerDeps,
) -> Result<Vec<ContentListing>, WorkflowError> {
    let scope = if Capability::ViewAllContent.is_granted_to(actor.role) {
        None
    } else {
        Some(actor.publisher_agency()?)
    };
    Content::list_in_period(scope, period, &deps.db_pool).await
}
