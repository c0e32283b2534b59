//! Revenue summary per LGA for the revenue page.

use serde::{Deserialize, Serialize};

use crate::rate::RateLevel;

/// Collected against potential property tax revenue in one LGA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueSummary {
    pub region: String,
    pub lga: String,
    pub total_properties: u32,
    pub potential_revenue: u64,
    pub actual_revenue: u64,
    /// Percentage of properties that paid, `0..=100`.
    pub tax_compliance_rate: u32,
    pub tax_loss_due_to_vacant: u64,
    pub tax_loss_due_to_undeveloped: u64,
}

impl RevenueSummary {
    /// 80% and above is good, 60% and above needs attention.
    pub fn compliance_level(&self) -> RateLevel {
        RateLevel::higher_is_better(f64::from(self.tax_compliance_rate), 80.0, 60.0)
    }
}

/// Headline numbers of the revenue page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevenueOverview {
    pub total_potential_revenue: u64,
    pub actual_revenue: u64,
    pub compliance_rate: u32,
    pub revenue_loss: u64,
}

impl Default for RevenueOverview {
    fn default() -> Self {
        Self {
            total_potential_revenue: 25_000_000,
            actual_revenue: 17_500_000,
            compliance_rate: 70,
            revenue_loss: 7_500_000,
        }
    }
}

/// Demo revenue summary of the five largest Plateau LGAs.
pub fn revenue_summary() -> Vec<RevenueSummary> {
    [
        ("Jos North", 3500, 8_500_000, 6_800_000, 80, 1_000_000, 700_000),
        ("Jos South", 4200, 9_000_000, 6_750_000, 75, 1_500_000, 750_000),
        ("Mangu", 2100, 3_500_000, 2_450_000, 70, 600_000, 450_000),
        ("Barkin Ladi", 1800, 2_500_000, 1_625_000, 65, 500_000, 375_000),
        ("Bokkos", 1500, 1_500_000, 875_000, 58, 350_000, 275_000),
    ]
    .into_iter()
    .map(
        |(lga, total_properties, potential, actual, compliance, vacant, undeveloped)| {
            RevenueSummary {
                region: "Plateau".to_owned(),
                lga: lga.to_owned(),
                total_properties,
                potential_revenue: potential,
                actual_revenue: actual,
                tax_compliance_rate: compliance,
                tax_loss_due_to_vacant: vacant,
                tax_loss_due_to_undeveloped: undeveloped,
            }
        },
    )
    .collect()
}
