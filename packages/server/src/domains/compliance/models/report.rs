use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::collections::HashMap;

use super::quota::{average_percentage, compliance_percentage, ComplianceStatus};
use crate::common::{AgencyId, ReportPeriod, WorkflowError};

/// Per-SKPD content counts for one period, straight from the database
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct AgencyPeriodCounts {
    pub agency_id: AgencyId,
    pub agency_name: String,
    pub monthly_quota: i32,
    pub approved: i64,
    pub pending: i64,
    pub rejected: i64,
}

/// One SKPD's standing for a period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgencyCompliance {
    pub agency_id: AgencyId,
    pub agency_name: String,
    pub monthly_quota: i32,
    pub approved: i64,
    pub pending: i64,
    pub rejected: i64,
    pub percentage: Decimal,
    pub status: ComplianceStatus,
}

impl From<AgencyPeriodCounts> for AgencyCompliance {
    fn from(counts: AgencyPeriodCounts) -> Self {
        let percentage = compliance_percentage(counts.approved, counts.monthly_quota);
        Self {
            agency_id: counts.agency_id,
            agency_name: counts.agency_name,
            monthly_quota: counts.monthly_quota,
            approved: counts.approved,
            pending: counts.pending,
            rejected: counts.rejected,
            percentage,
            status: ComplianceStatus::classify(percentage),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTotals {
    pub total_agencies: usize,
    pub compliant: usize,
    pub partial: usize,
    pub non_compliant: usize,
    pub average_percentage: Decimal,
}

impl ReportTotals {
    pub fn from_agencies(agencies: &[AgencyCompliance]) -> Self {
        let count = |status: ComplianceStatus| agencies.iter().filter(|a| a.status == status).count();
        let percentages: Vec<Decimal> = agencies.iter().map(|a| a.percentage).collect();

        Self {
            total_agencies: agencies.len(),
            compliant: count(ComplianceStatus::Compliant),
            partial: count(ComplianceStatus::Partial),
            non_compliant: count(ComplianceStatus::NonCompliant),
            average_percentage: average_percentage(&percentages),
        }
    }
}

/// Compliance across all active SKPDs for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub period: ReportPeriod,
    pub agencies: Vec<AgencyCompliance>,
    pub totals: ReportTotals,
}

impl ComplianceReport {
    pub fn new(period: ReportPeriod, counts: Vec<AgencyPeriodCounts>) -> Self {
        let agencies: Vec<AgencyCompliance> = counts.into_iter().map(Into::into).collect();
        let totals = ReportTotals::from_agencies(&agencies);
        Self {
            period,
            agencies,
            totals,
        }
    }
}

/// One month of an SKPD's trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub period: ReportPeriod,
    pub approved: i64,
    pub percentage: Decimal,
    pub status: ComplianceStatus,
}

/// Trend points for `periods` (already oldest first). Months without a row count as zero.
pub fn build_trend(
    periods: &[ReportPeriod],
    quota: i32,
    approved_by_month: &HashMap<NaiveDate, i64>,
) -> Vec<TrendPoint> {
    periods
        .iter()
        .map(|period| {
            let approved = approved_by_month
                .get(&period.first_day())
                .copied()
                .unwrap_or(0);
            let percentage = compliance_percentage(approved, quota);
            TrendPoint {
                period: *period,
                approved,
                percentage,
                status: ComplianceStatus::classify(percentage),
            }
        })
        .collect()
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct MonthlyApproved {
    month_start: NaiveDate,
    approved: i64,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl AgencyPeriodCounts {
    /// Counts for every active SKPD, by publication date inside the period
    pub async fn for_active_agencies(
        period: ReportPeriod,
        pool: &PgPool,
    ) -> Result<Vec<Self>, WorkflowError> {
        Self::query(None, period, pool).await
    }

    /// Counts for one SKPD regardless of its status
    pub async fn for_agency(
        agency_id: AgencyId,
        period: ReportPeriod,
        pool: &PgPool,
    ) -> Result<Option<Self>, WorkflowError> {
        Ok(Self::query(Some(agency_id), period, pool).await?.into_iter().next())
    }

    async fn query(
        agency_id: Option<AgencyId>,
        period: ReportPeriod,
        pool: &PgPool,
    ) -> Result<Vec<Self>, WorkflowError> {
        let rows = sqlx::query_as::<_, AgencyPeriodCounts>(
            r#"
            SELECT
                s.id AS agency_id,
                s.nama AS agency_name,
                s.kuota_bulanan AS monthly_quota,
                COUNT(k.id) FILTER (WHERE k.status = 'approved') AS approved,
                COUNT(k.id) FILTER (WHERE k.status = 'pending') AS pending,
                COUNT(k.id) FILTER (WHERE k.status = 'rejected') AS rejected
            FROM skpd s
            LEFT JOIN konten k
                ON k.skpd_id = s.id
               AND k.tanggal_publikasi >= $1
               AND k.tanggal_publikasi < $2
            WHERE ($3::uuid IS NULL AND s.status = 'active')
               OR s.id = $3
            GROUP BY s.id, s.nama, s.kuota_bulanan
            ORDER BY s.nama
            "#,
        )
        .bind(period.first_day())
        .bind(period.end_exclusive()?)
        .bind(agency_id)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }
}

/// Approved content per month (keyed by first day) for one SKPD over a date range
pub async fn approved_by_month(
    agency_id: AgencyId,
    from: NaiveDate,
    until_exclusive: NaiveDate,
    pool: &PgPool,
) -> sqlx::Result<HashMap<NaiveDate, i64>> {
    let rows = sqlx::query_as::<_, MonthlyApproved>(
        r#"
        SELECT
            date_trunc('month', tanggal_publikasi::timestamp)::date AS month_start,
            COUNT(*) AS approved
        FROM konten
        WHERE skpd_id = $1
          AND status = 'approved'
          AND tanggal_publikasi >= $2
          AND tanggal_publikasi < $3
        GROUP BY 1
        ORDER BY 1
        "#,
    )
    .bind(agency_id)
    .bind(from)
    .bind(until_exclusive)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| (row.month_start, row.approved))
        .collect())
}
