//! GraphQL types for compliance reporting
//!
//! Counts are exposed as `Int` and percentages as `Float` rounded to two places.

use juniper::GraphQLObject;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domains::compliance::models::{
    AgencyCompliance, ComplianceReport, ComplianceStatus, ReportTotals, TrendPoint,
};
use crate::server::graphql::context::GraphQLContext;

fn to_float(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

fn to_int<T: TryInto<i32>>(value: T) -> i32 {
    value.try_into().unwrap_or(i32::MAX)
}

#[derive(Debug, Clone, GraphQLObject)]
#[graphql(context = GraphQLContext)]
pub struct AgencyComplianceData {
    pub agency_id: Uuid,
    pub agency_name: String,
    pub monthly_quota: i32,
    pub approved: i32,
    pub pending: i32,
    pub rejected: i32,
    pub percentage: f64,
    pub status: ComplianceStatus,
    pub status_label: String,
}

impl From<AgencyCompliance> for AgencyComplianceData {
    fn from(row: AgencyCompliance) -> Self {
        Self {
            agency_id: row.agency_id.into_uuid(),
            agency_name: row.agency_name,
            monthly_quota: row.monthly_quota,
            approved: to_int(row.approved),
            pending: to_int(row.pending),
            rejected: to_int(row.rejected),
            percentage: to_float(row.percentage),
            status: row.status,
            status_label: row.status.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, GraphQLObject)]
#[graphql(context = GraphQLContext)]
pub struct ReportTotalsData {
    pub total_agencies: i32,
    pub compliant: i32,
    pub partial: i32,
    pub non_compliant: i32,
    pub average_percentage: f64,
}

impl From<ReportTotals> for ReportTotalsData {
    fn from(totals: ReportTotals) -> Self {
        Self {
            total_agencies: to_int(totals.total_agencies),
            compliant: to_int(totals.compliant),
            partial: to_int(totals.partial),
            non_compliant: to_int(totals.non_compliant),
            average_percentage: to_float(totals.average_percentage),
        }
    }
}

#[derive(Debug, Clone, GraphQLObject)]
#[graphql(context = GraphQLContext)]
pub struct ComplianceReportData {
    /// `YYYY-MM`
    pub period: String,
    pub agencies: Vec<AgencyComplianceData>,
    pub totals: ReportTotalsData,
}

impl From<ComplianceReport> for ComplianceReportData {
    fn from(report: ComplianceReport) -> Self {
        Self {
            period: report.period.to_string(),
            agencies: report.agencies.into_iter().map(Into::into).collect(),
            totals: report.totals.into(),
        }
    }
}

#[derive(Debug, Clone, GraphQLObject)]
#[graphql(context = GraphQLContext)]
pub struct TrendPointData {
    pub month: i32,
    pub year: i32,
    pub period: String,
    pub approved: i32,
    pub percentage: f64,
    pub status: ComplianceStatus,
}

impl From<TrendPoint> for TrendPointData {
    fn from(point: TrendPoint) -> Self {
        Self {
            month: to_int(point.period.month()),
            year: point.period.year(),
            period: point.period.to_string(),
            approved: to_int(point.approved),
            percentage: to_float(point.percentage),
            status: point.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ReportPeriod;
    use std::str::FromStr;

    #[test]
    fn trend_point_exposes_month_and_float_percentage() {
        let data = TrendPointData::from(TrendPoint {
            period: ReportPeriod::new(4, 2025).unwrap(),
            approved: 2,
            percentage: Decimal::from_str("66.67").unwrap(),
            status: ComplianceStatus::Partial,
        });
        assert_eq!(data.month, 4);
        assert_eq!(data.period, "2025-04");
        assert!((data.percentage - 66.67).abs() < f64::EPSILON);
    }
}
