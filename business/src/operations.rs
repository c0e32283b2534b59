//! Enumerator performance for the operational efficiency page.

use serde::{Deserialize, Serialize};

use crate::rate::RateLevel;

/// Field work figures of one enumerator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumeratorPerformance {
    pub id: String,
    pub name: String,
    pub region: String,
    pub properties_enumerated: u32,
    /// Percentage of records that passed validation.
    pub validation_rate: u32,
    /// Percentage of records with errors.
    pub error_rate: f64,
    pub average_minutes_per_property: u32,
    /// Human readable, e.g. "Today, 10:45 AM".
    pub last_active: String,
}

impl EnumeratorPerformance {
    pub fn validation_level(&self) -> RateLevel {
        RateLevel::higher_is_better(f64::from(self.validation_rate), 95.0, 90.0)
    }

    pub fn error_level(&self) -> RateLevel {
        RateLevel::lower_is_better(self.error_rate, 2.5, 5.0)
    }
}

/// Headline numbers of the operations page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationsOverview {
    pub total_enumerators: u32,
    pub properties_enumerated: u32,
    pub validation_rate: u32,
    pub pending_validations: u32,
}

impl Default for OperationsOverview {
    fn default() -> Self {
        Self {
            total_enumerators: 85,
            properties_enumerated: 21_000,
            validation_rate: 94,
            pending_validations: 245,
        }
    }
}

/// Demo performance of the five most active enumerators.
pub fn enumerator_performance() -> Vec<EnumeratorPerformance> {
    [
        ("EN001", "John Doe", "Jos North", 452, 96, 2.1, 25, "Today, 10:45 AM"),
        ("EN002", "Jane Smith", "Jos South", 387, 94, 3.2, 30, "Today, 11:30 AM"),
        ("EN003", "Mohammed Ibrahim", "Mangu", 328, 92, 4.5, 35, "Yesterday, 4:15 PM"),
        ("EN004", "Alice Johnson", "Barkin Ladi", 298, 95, 2.8, 28, "Today, 9:20 AM"),
        ("EN005", "Samuel Dakwom", "Bokkos", 265, 93, 3.5, 32, "Today, 12:45 PM"),
    ]
    .into_iter()
    .map(
        |(id, name, region, properties, validation, error, minutes, last_active)| {
            EnumeratorPerformance {
                id: id.to_owned(),
                name: name.to_owned(),
                region: region.to_owned(),
                properties_enumerated: properties,
                validation_rate: validation,
                error_rate: error,
                average_minutes_per_property: minutes,
                last_active: last_active.to_owned(),
            }
        },
    )
    .collect()
}
