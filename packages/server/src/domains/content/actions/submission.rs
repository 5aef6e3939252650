//! Publisher-side content actions: create, submit, edit
//!
//! Each action takes the acting user explicitly, validates input before any
//! write, and changes status only through `ContentStatus::apply`.

use tracing::{debug, info};
use url::Url;

use crate::common::{
    optional_text, required_text, Actor, Capability, CategoryId, ContentId, WorkflowError,
};
use crate::domains::agency::models::Agency;
use crate::domains::category::models::Category;
use crate::domains::content::data::ContentInput;
use crate::domains::content::events::ContentEvent;
use crate::domains::content::models::{
    Content, ContentChanges, ContentStatus, ContentTransition, NewContent,
};
use crate::kernel::ServerDeps;

pub const TITLE_MAX_CHARS: usize = 255;
pub const DESCRIPTION_MAX_CHARS: usize = 5000;

/// Create content for the publisher's SKPD, as a draft or straight into review
pub async fn create_content(
    actor: &Actor,
    input: ContentInput,
    submit: bool,
    deps: &ServerDeps,
) -> Result<Content, WorkflowError> {
    actor.can(Capability::SubmitContent).check()?;
    let agency_id = actor.publisher_agency()?;

    let agency = Agency::get(agency_id, &deps.db_pool).await?;
    if !agency.is_active() {
        return Err(WorkflowError::invalid_state(format!(
            "SKPD '{}' is inactive",
            agency.name
        )));
    }

    let changes = validate_input(input, deps).await?;
    let status = ContentStatus::initial(submit);

    info!(agency_id = %agency_id, publisher_id = %actor.user_id, status = %status, "Creating content");

    let content = Content::create(
        NewContent::builder()
            .agency_id(agency_id)
            .publisher_id(actor.user_id)
            .category_id(changes.category_id)
            .title(changes.title)
            .description(changes.description)
            .publication_url(changes.publication_url)
            .publication_date(changes.publication_date)
            .status(status)
            .build(),
        &deps.db_pool,
    )
    .await?;

    deps.dispatch(&ContentEvent::ContentCreated {
        content_id: content.id,
        publisher_id: actor.user_id,
        status,
    })
    .await;

    Ok(content)
}

/// Send a draft for review (Draft → Pending)
pub async fn submit_content(
    actor: &Actor,
    content_id: ContentId,
    deps: &ServerDeps,
) -> Result<Content, WorkflowError> {
    actor.can(Capability::SubmitContent).check()?;

    let mut tx = deps.db_pool.begin().await?;

    let content = Content::find_for_update(content_id, &mut *tx)
        .await?
        .ok_or_else(|| WorkflowError::not_found("content", content_id))?;
    ensure_owner(actor, &content)?;

    let next = content
        .status
        .apply(ContentTransition::Submit)
        .map_err(|e| WorkflowError::invalid_state(e.to_string()))?;

    info!(content_id = %content_id, publisher_id = %actor.user_id, "Submitting content for verification");

    let content = Content::set_status(content_id, next, &mut *tx).await?;
    tx.commit().await?;

    deps.dispatch(&ContentEvent::ContentSubmitted {
        content_id,
        publisher_id: actor.user_id,
    })
    .await;

    Ok(content)
}

/// Edit draft or rejected content.
///
/// Rejected content always goes back to Pending. A draft stays a draft unless
/// `submit` is set.
pub async fn edit_content(
    actor: &Actor,
    content_id: ContentId,
    input: ContentInput,
    submit: bool,
    deps: &ServerDeps,
) -> Result<Content, WorkflowError> {
    actor.can(Capability::SubmitContent).check()?;

    let mut tx = deps.db_pool.begin().await?;

    let current = Content::find_for_update(content_id, &mut *tx)
        .await?
        .ok_or_else(|| WorkflowError::not_found("content", content_id))?;
    ensure_owner(actor, &current)?;

    if !current.status.is_editable() {
        return Err(WorkflowError::invalid_state(format!(
            "content in {} status cannot be edited",
            current.status
        )));
    }

    let changes = validate_input(input, deps).await?;

    let transition = match current.status {
        ContentStatus::Rejected => Some(ContentTransition::Resubmit),
        ContentStatus::Draft if submit => Some(ContentTransition::Submit),
        _ => None,
    };
    let next = match transition {
        Some(t) => current
            .status
            .apply(t)
            .map_err(|e| WorkflowError::invalid_state(e.to_string()))?,
        None => current.status,
    };

    info!(
        content_id = %content_id,
        from = %current.status,
        to = %next,
        "Editing content"
    );

    let content = Content::update_details(content_id, changes, next, &mut *tx).await?;
    tx.commit().await?;

    let event = match transition {
        Some(ContentTransition::Resubmit) => ContentEvent::ContentResubmitted {
            content_id,
            publisher_id: actor.user_id,
        },
        Some(_) => ContentEvent::ContentSubmitted {
            content_id,
            publisher_id: actor.user_id,
        },
        None => ContentEvent::ContentEdited { content_id },
    };
    deps.dispatch(&event).await;

    Ok(content)
}

fn ensure_owner(actor: &Actor, content: &Content) -> Result<(), WorkflowError> {
    if content.is_owned_by(actor.user_id) {
        return Ok(());
    }
    debug!(content_id = %content.id, user_id = %actor.user_id, "Rejected change by non-owner");
    Err(WorkflowError::Authorization(
        "only the publisher who created this content may change it".to_string(),
    ))
}

/// Validate publisher input and check the category can be used.
async fn validate_input(
    input: ContentInput,
    deps: &ServerDeps,
) -> Result<ContentChanges, WorkflowError> {
    let title = validate_title(&input.title)?;
    let description = normalize_description(input.description)?;
    let publication_url = validate_publication_url(&input.publication_url)?;

    let category_id = CategoryId::from_uuid(input.category_id);
    let category = Category::find_by_id(category_id, &deps.db_pool)
        .await?
        .ok_or_else(|| WorkflowError::validation(format!("unknown category {}", category_id)))?;
    if !category.is_active {
        return Err(WorkflowError::validation(format!(
            "category '{}' is inactive",
            category.name
        )));
    }

    Ok(ContentChanges {
        category_id,
        title,
        description,
        publication_url,
        publication_date: input.publication_date,
    })
}

pub fn validate_title(raw: &str) -> Result<String, WorkflowError> {
    required_text("title", raw, TITLE_MAX_CHARS)
}

/// Blank descriptions are stored as NULL.
pub fn normalize_description(raw: Option<String>) -> Result<Option<String>, WorkflowError> {
    optional_text("description", raw, DESCRIPTION_MAX_CHARS)
}

/// Only absolute http(s) links are accepted.
pub fn validate_publication_url(raw: &str) -> Result<String, WorkflowError> {
    let raw = raw.trim();
    let url = Url::parse(raw)
        .map_err(|e| WorkflowError::validation(format!("invalid publication URL: {}", e)))?;

    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(raw.to_string()),
        "http" | "https" => Err(WorkflowError::validation("publication URL must have a host")),
        other => Err(WorkflowError::validation(format!(
            "publication URL must use http or https, got {}",
            other
        ))),
    }
}
