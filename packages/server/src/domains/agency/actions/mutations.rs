//! SKPD administration (Admin only)

use tracing::info;

use crate::common::{
    is_unique_violation, required_text, Actor, AgencyId, Capability, WorkflowError,
};
use crate::domains::agency::data::AgencyInput;
use crate::domains::agency::models::Agency;
use crate::domains::content::models::Content;
use crate::domains::user::models::User;
use crate::kernel::ServerDeps;

pub const NAME_MAX_CHARS: usize = 255;

pub async fn create_agency(
    actor: &Actor,
    input: AgencyInput,
    deps: &ServerDeps,
) -> Result<Agency, WorkflowError> {
    actor.can(Capability::ManageAgencies).check()?;

    let name = required_text("SKPD name", &input.name, NAME_MAX_CHARS)?;
    let quota = validate_quota(input.monthly_quota.unwrap_or(deps.default_monthly_quota))?;

    info!(name = %name, monthly_quota = quota, "Creating SKPD");

    Agency::create(AgencyId::new(), &name, quota, &deps.db_pool)
        .await
        .map_err(|e| duplicate_name(e, &name))
}

/// Rename an SKPD and/or change its quota. A missing quota keeps the current one.
pub async fn update_agency(
    actor: &Actor,
    agency_id: AgencyId,
    input: AgencyInput,
    deps: &ServerDeps,
) -> Result<Agency, WorkflowError> {
    actor.can(Capability::ManageAgencies).check()?;

    let current = Agency::get(agency_id, &deps.db_pool).await?;
    let name = required_text("SKPD name", &input.name, NAME_MAX_CHARS)?;
    let quota = validate_quota(input.monthly_quota.unwrap_or(current.monthly_quota))?;

    info!(agency_id = %agency_id, name = %name, monthly_quota = quota, "Updating SKPD");

    Agency::update(agency_id, &name, quota, &deps.db_pool)
        .await
        .map_err(|e| duplicate_name(e, &name))
}

/// Flip between active and inactive
pub async fn toggle_agency_status(
    actor: &Actor,
    agency_id: AgencyId,
    deps: &ServerDeps,
) -> Result<Agency, WorkflowError> {
    actor.can(Capability::ManageAgencies).check()?;

    let current = Agency::get(agency_id, &deps.db_pool).await?;
    let status = current.status.toggled();

    info!(agency_id = %agency_id, status = %status, "Toggling SKPD status");

    Ok(Agency::set_status(agency_id, status, &deps.db_pool).await?)
}

/// Delete an SKPD that owns nothing. Referenced SKPDs must be deactivated instead.
pub async fn delete_agency(
    actor: &Actor,
    agency_id: AgencyId,
    deps: &ServerDeps,
) -> Result<(), WorkflowError> {
    actor.can(Capability::ManageAgencies).check()?;

    let agency = Agency::get(agency_id, &deps.db_pool).await?;
    let contents = Content::count_by_agency(agency_id, &deps.db_pool).await?;
    let users = User::count_by_agency(agency_id, &deps.db_pool).await?;

    if contents > 0 || users > 0 {
        return Err(WorkflowError::invalid_state(format!(
            "SKPD '{}' still has {} content item(s) and {} user(s); deactivate it instead",
            agency.name, contents, users
        )));
    }

    info!(agency_id = %agency_id, name = %agency.name, "Deleting SKPD");

    Agency::delete(agency_id, &deps.db_pool).await?;
    Ok(())
}

pub fn validate_quota(quota: i32) -> Result<i32, WorkflowError> {
    if quota < 1 {
        return Err(WorkflowError::validation(format!(
            "monthly quota must be at least 1, got {}",
            quota
        )));
    }
    Ok(quota)
}

fn duplicate_name(err: sqlx::Error, name: &str) -> WorkflowError {
    if is_unique_violation(&err) {
        WorkflowError::validation(format!("SKPD '{}' already exists", name))
    } else {
        err.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_must_be_positive() {
        assert_eq!(validate_quota(1).unwrap(), 1);
        assert_eq!(validate_quota(12).unwrap(), 12);
        assert!(matches!(validate_quota(0), Err(WorkflowError::Validation(_))));
        assert!(validate_quota(-3).is_err());
    }
}
