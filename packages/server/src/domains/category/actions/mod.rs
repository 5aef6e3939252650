//! Category actions
//!
//! Categories are never deleted; they are deactivated so existing content keeps
//! its classification.

use tracing::info;

use crate::common::{
    is_unique_violation, optional_text, required_text, Actor, Capability, CategoryId,
    WorkflowError,
};
use crate::domains::category::data::CategoryInput;
use crate::domains::category::models::Category;
use crate::kernel::ServerDeps;

pub const NAME_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

pub async fn create_category(
    actor: &Actor,
    input: CategoryInput,
    deps: &ServerDeps,
) -> Result<Category, WorkflowError> {
    actor.can(Capability::ManageCategories).check()?;

    let name = required_text("category name", &input.name, NAME_MAX_CHARS)?;
    let description = optional_text("category description", input.description, DESCRIPTION_MAX_CHARS)?;

    info!(name = %name, "Creating category");

    Category::create(CategoryId::new(), &name, description.as_deref(), &deps.db_pool)
        .await
        .map_err(|e| duplicate_name(e, &name))
}

pub async fn update_category(
    actor: &Actor,
    category_id: CategoryId,
    input: CategoryInput,
    deps: &ServerDeps,
) -> Result<Category, WorkflowError> {
    actor.can(Capability::ManageCategories).check()?;

    Category::get(category_id, &deps.db_pool).await?;
    let name = required_text("category name", &input.name, NAME_MAX_CHARS)?;
    let description = optional_text("category description", input.description, DESCRIPTION_MAX_CHARS)?;

    info!(category_id = %category_id, name = %name, "Updating category");

    Category::update(category_id, &name, description.as_deref(), &deps.db_pool)
        .await
        .map_err(|e| duplicate_name(e, &name))
}

pub async fn toggle_category(
    actor: &Actor,
    category_id: CategoryId,
    deps: &ServerDeps,
) -> Result<Category, WorkflowError> {
    actor.can(Capability::ManageCategories).check()?;

    let current = Category::get(category_id, &deps.db_pool).await?;

    info!(category_id = %category_id, is_active = !current.is_active, "Toggling category");

    Ok(Category::set_active(category_id, !current.is_active, &deps.db_pool).await?)
}

/// Any signed-in user may list categories; publishers need them to classify content.
pub async fn list_categories(
    _actor: &Actor,
    active_only: bool,
    deps: &ServerDeps,
) -> Result<Vec<Category>, WorkflowError> {
    Ok(Category::find_all(active_only, &deps.db_pool).await?)
}

fn duplicate_name(err: sqlx::Error, name: &str) -> WorkflowError {
    if is_unique_violation(&err) {
        WorkflowError::validation(format!("category '{}' already exists", name))
    } else {
        err.into()
    }
}
