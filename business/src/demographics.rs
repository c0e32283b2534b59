//! Property mix per ward for the demographics page.

use serde::{Deserialize, Serialize};

/// Property counts by use for one ward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionDemographics {
    pub region: String,
    pub lga: String,
    pub ward: String,
    pub total_properties: u32,
    pub residential_count: u32,
    pub commercial_count: u32,
    pub industrial_count: u32,
    pub agricultural_count: u32,
    pub mixed_use_count: u32,
    pub undeveloped_count: u32,
    /// In m².
    pub average_property_size: u32,
    /// Share of properties with more than one owner, `0..=100`.
    pub multiple_ownership_percentage: u32,
}

/// Headline numbers of the demographics page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemographicsOverview {
    pub total_properties: u32,
    pub residential: u32,
    pub developed: u32,
    pub multiple_owners: u32,
}

impl Default for DemographicsOverview {
    fn default() -> Self {
        Self {
            total_properties: 12_000,
            residential: 7_000,
            developed: 6_000,
            multiple_owners: 3_000,
        }
    }
}

/// Demo ward demographics.
pub fn region_demographics() -> Vec<RegionDemographics> {
    [
        ("Jos North", "Kabong", [3500, 2800, 500, 50, 20, 80, 50], 450, 35),
        ("Jos South", "Bukuru", [4200, 3000, 800, 150, 50, 100, 100], 520, 28),
        ("Mangu", "Mangu", [2100, 1500, 300, 20, 200, 30, 50], 650, 22),
        ("Barkin Ladi", "Barkin Ladi", [1800, 1200, 250, 30, 250, 20, 50], 720, 18),
        ("Bokkos", "Bokkos", [1500, 900, 200, 50, 280, 20, 50], 850, 15),
    ]
    .into_iter()
    .map(|(lga, ward, counts, size, multiple)| {
        let [total, residential, commercial, industrial, agricultural, mixed_use, undeveloped] =
            counts;
        RegionDemographics {
            region: "Plateau".to_owned(),
            lga: lga.to_owned(),
            ward: ward.to_owned(),
            total_properties: total,
            residential_count: residential,
            commercial_count: commercial,
            industrial_count: industrial,
            agricultural_count: agricultural,
            mixed_use_count: mixed_use,
            undeveloped_count: undeveloped,
            average_property_size: size,
            multiple_ownership_percentage: multiple,
        }
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_demographics() {
        let rows = region_demographics();
        assert_eq!(rows.len(), 5);
        assert!(
            rows.iter().all(|r| r.residential_count <= r.total_properties),
            "residential is part of the total"
        );
        assert!(
            rows.iter().all(|r| r.multiple_ownership_percentage <= 100),
            "percentages stay in range"
        );
    }
}
