pub mod quota;
pub mod report;

pub use quota::{average_percentage, compliance_percentage, ComplianceStatus};
pub use report::{
    approved_by_month, build_trend, AgencyCompliance, AgencyPeriodCounts, ComplianceReport,
    ReportTotals, TrendPoint,
};
