pub mod actions;
pub mod data;
pub mod models;

pub use data::{ComplianceReportData, TrendPointData};
pub use models::{ComplianceReport, ComplianceStatus};
