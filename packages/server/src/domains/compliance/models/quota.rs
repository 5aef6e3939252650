//! Quota compliance arithmetic
//!
//! Pure functions of (approved count, quota). Percentages are exact decimals
//! rounded to two places, half away from zero.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Percentage at or above which an SKPD meets its quota
pub const COMPLIANT_THRESHOLD: Decimal = Decimal::ONE_HUNDRED;

/// Percentage at or above which an SKPD partially meets its quota
pub const PARTIAL_THRESHOLD: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, juniper::GraphQLEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    Partial,
    NonCompliant,
}

impl ComplianceStatus {
    /// Inclusive lower bounds: 100 and 50.
    ///
    /// Takes the percentage after rounding to 2 places, so 29999 of 30000
    /// (99.997 → 100.00) is Compliant. Classify what is displayed, not the raw ratio.
    pub fn classify(percentage: Decimal) -> Self {
        if percentage >= COMPLIANT_THRESHOLD {
            ComplianceStatus::Compliant
        } else if percentage >= PARTIAL_THRESHOLD {
            ComplianceStatus::Partial
        } else {
            ComplianceStatus::NonCompliant
        }
    }

    /// Label used in reports and exports
    pub fn label(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "Memenuhi",
            ComplianceStatus::Partial => "Sebagian",
            ComplianceStatus::NonCompliant => "Belum Memenuhi",
        }
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// round(approved / quota × 100, 2); zero when the quota is not positive.
pub fn compliance_percentage(approved: i64, quota: i32) -> Decimal {
    if quota <= 0 {
        return Decimal::ZERO;
    }
    let raw = Decimal::from(approved) * Decimal::ONE_HUNDRED / Decimal::from(quota);
    round_percentage(raw)
}

/// Mean of the given percentages, rounded like a single percentage. Empty input is zero.
pub fn average_percentage(percentages: &[Decimal]) -> Decimal {
    if percentages.is_empty() {
        return Decimal::ZERO;
    }
    let sum: Decimal = percentages.iter().copied().sum();
    round_percentage(sum / Decimal::from(percentages.len()))
}

fn round_percentage(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
