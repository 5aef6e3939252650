use crate::common::{Actor, AgencyId, Capability, WorkflowError};
use crate::domains::agency::models::Agency;
use crate::kernel::ServerDeps;

/// All SKPDs by name; operators and admins only
pub async fn list_agencies(actor: &Actor, deps: &ServerDeps) -> Result<Vec<Agency>, WorkflowError> {
    actor.can(Capability::ViewReports).check()?;
    Ok(Agency::find_all(&deps.db_pool).await?)
}

/// One SKPD. Publishers may only look up their own.
pub async fn get_agency(
    actor: &Actor,
    agency_id: AgencyId,
    deps: &ServerDeps,
) -> Result<Agency, WorkflowError> {
    actor.can_read_agency(agency_id)?;
    Agency::get(agency_id, &deps.db_pool).await
}
