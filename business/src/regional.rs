//! Ward-level regional figures for the regional data page.

use serde::{Deserialize, Serialize};

/// Population, land and valuation figures of one ward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSummary {
    pub region: String,
    pub lga: String,
    pub ward: String,
    pub total_properties: u32,
    pub population: u32,
    /// People per km².
    pub population_density: u32,
    /// In km².
    pub land_area: u32,
    /// Properties per km².
    pub property_density: u32,
    /// In m².
    pub average_property_size: u32,
    /// Naira per m².
    pub value_per_sq_meter: u64,
}

impl RegionSummary {
    /// Properties × average size × value per m², in naira.
    pub fn total_evaluation_price(&self) -> u64 {
        u64::from(self.total_properties)
            .saturating_mul(u64::from(self.average_property_size))
            .saturating_mul(self.value_per_sq_meter)
    }
}

/// LGA totals behind the regional headline cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionBreakdown {
    pub region: String,
    pub properties: u32,
    /// In km².
    pub area: u32,
    pub population: u32,
}

/// Headline numbers of the regional data page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionalOverview {
    pub regions: usize,
    pub total_properties: u64,
    pub total_population: u64,
    pub total_land_area: u64,
    pub total_evaluation: u64,
}

impl RegionalOverview {
    pub fn from_data(breakdown: &[RegionBreakdown], summary: &[RegionSummary]) -> Self {
        Self {
            regions: breakdown.len(),
            total_properties: breakdown.iter().map(|r| u64::from(r.properties)).sum(),
            total_population: breakdown.iter().map(|r| u64::from(r.population)).sum(),
            total_land_area: breakdown.iter().map(|r| u64::from(r.area)).sum(),
            total_evaluation: summary
                .iter()
                .map(RegionSummary::total_evaluation_price)
                .fold(0, u64::saturating_add),
        }
    }
}

/// Demo LGA totals.
pub fn region_breakdown() -> Vec<RegionBreakdown> {
    [
        ("Jos North", 8500, 85, 420_000),
        ("Jos South", 7200, 95, 380_000),
        ("Mangu", 3500, 150, 295_000),
        ("Barkin Ladi", 2800, 110, 175_000),
        ("Bokkos", 2100, 130, 145_000),
    ]
    .into_iter()
    .map(|(region, properties, area, population)| RegionBreakdown {
        region: region.to_owned(),
        properties,
        area,
        population,
    })
    .collect()
}

/// Demo ward figures for Jos North and Jos South.
pub fn region_summary() -> Vec<RegionSummary> {
    [
        ("Jos North", "Kabong", 2100, 85_000, 7083, 12, 175, 420, 80_000),
        ("Jos North", "Jenta", 1800, 76_000, 7600, 10, 180, 380, 85_000),
        ("Jos North", "Tudun Wada", 1650, 72_000, 9000, 8, 206, 350, 90_000),
        ("Jos South", "Bukuru", 1900, 82_000, 5467, 15, 127, 480, 75_000),
        ("Jos South", "Gyel", 1500, 68_000, 3778, 18, 83, 520, 70_000),
    ]
    .into_iter()
    .map(
        |(lga, ward, properties, population, population_density, land_area, property_density, size, value)| {
            RegionSummary {
                region: "Plateau".to_owned(),
                lga: lga.to_owned(),
                ward: ward.to_owned(),
                total_properties: properties,
                population,
                population_density,
                land_area,
                property_density,
                average_property_size: size,
                value_per_sq_meter: value,
            }
        },
    )
    .collect()
}
