//! Compliance reporting actions

pub mod export;

use tracing::info;

use crate::common::{Actor, AgencyId, Capability, ReportPeriod, WorkflowError};
use crate::domains::agency::models::Agency;
use crate::domains::compliance::models::{
    approved_by_month, build_trend, AgencyCompliance, AgencyPeriodCounts, ComplianceReport,
    TrendPoint,
};
use crate::kernel::ServerDeps;

pub use export::{compliance_csv, contents_csv, export_filename};

/// Number of months in a trend, including the reference month
pub const TREND_MONTHS: usize = 6;

/// Compliance of every active SKPD for one month, with totals
pub async fn compliance_report(
    actor: &Actor,
    period: ReportPeriod,
    deps: &ServerDeps,
) -> Result<ComplianceReport, WorkflowError> {
    actor.can(Capability::ViewReports).check()?;

    let counts = AgencyPeriodCounts::for_active_agencies(period, &deps.db_pool).await?;
    let report = ComplianceReport::new(period, counts);

    info!(
        period = %period,
        agencies = report.totals.total_agencies,
        average = %report.totals.average_percentage,
        "Built compliance report"
    );

    Ok(report)
}

/// Compliance of a single SKPD. Publishers may only ask about their own.
pub async fn agency_compliance(
    actor: &Actor,
    agency_id: AgencyId,
    period: ReportPeriod,
    deps: &ServerDeps,
) -> Result<AgencyCompliance, WorkflowError> {
    actor.can_read_agency(agency_id)?;

    AgencyPeriodCounts::for_agency(agency_id, period, &deps.db_pool)
        .await?
        .map(AgencyCompliance::from)
        .ok_or_else(|| WorkflowError::not_found("SKPD", agency_id))
}

/// The six months ending with `reference`, oldest first.
///
/// Every month is measured against the SKPD's current quota.
pub async fn compliance_trend(
    actor: &Actor,
    agency_id: AgencyId,
    reference: ReportPeriod,
    deps: &ServerDeps,
) -> Result<Vec<TrendPoint>, WorkflowError> {
    actor.can_read_agency(agency_id)?;

    let agency = Agency::get(agency_id, &deps.db_pool).await?;
    let periods = reference.trailing(TREND_MONTHS)?;
    let from = periods
        .first()
        .map(ReportPeriod::first_day)
        .unwrap_or_else(|| reference.first_day());

    let approved = approved_by_month(agency_id, from, reference.end_exclusive()?, &deps.db_pool).await?;

    Ok(build_trend(&periods, agency.monthly_quota, &approved))
}
