//! Property records shown on the properties page.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    Residential,
    Commercial,
    Industrial,
    Agricultural,
    #[serde(rename = "Mixed Use")]
    MixedUse,
}

impl PropertyType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
            Self::Industrial => "Industrial",
            Self::Agricultural => "Agricultural",
            Self::MixedUse => "Mixed Use",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxStatus {
    Paid,
    Unpaid,
    #[serde(rename = "Partially Paid")]
    PartiallyPaid,
    Exempt,
}

impl TaxStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Unpaid => "Unpaid",
            Self::PartiallyPaid => "Partially Paid",
            Self::Exempt => "Exempt",
        }
    }
}

impl fmt::Display for TaxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One enumerated property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub owner_name: String,
    pub property_id: String,
    pub lat: f64,
    pub lng: f64,
    pub property_type: PropertyType,
    /// Size in square metres.
    pub property_size: u32,
    pub tax_status: TaxStatus,
    pub region: String,
    pub lga: String,
    pub ward: String,
}

impl PropertyRecord {
    #[expect(clippy::too_many_arguments)]
    fn mock(
        owner_name: &str,
        property_id: &str,
        (lat, lng): (f64, f64),
        property_type: PropertyType,
        property_size: u32,
        tax_status: TaxStatus,
        lga: &str,
        ward: &str,
    ) -> Self {
        Self {
            owner_name: owner_name.to_owned(),
            property_id: property_id.to_owned(),
            lat,
            lng,
            property_type,
            property_size,
            tax_status,
            region: "Plateau".to_owned(),
            lga: lga.to_owned(),
            ward: ward.to_owned(),
        }
    }
}

/// Property count per local government area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LgaDistribution {
    pub lga: String,
    pub properties: u32,
}

/// Headline numbers of the properties page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyOverview {
    pub total_properties: u32,
    pub residential: u32,
    pub commercial: u32,
    pub industrial: u32,
}

impl Default for PropertyOverview {
    fn default() -> Self {
        Self {
            total_properties: 10_000,
            residential: 7_000,
            commercial: 2_500,
            industrial: 500,
        }
    }
}

/// Demo property records.
pub fn mock_properties() -> Vec<PropertyRecord> {
    use PropertyType as P;
    use TaxStatus as S;

    vec![
        PropertyRecord::mock("John Doe", "PROP-12345", (9.9188, 8.8942), P::Residential, 500, S::Paid, "Jos North", "Kabong"),
        PropertyRecord::mock("Jane Smith", "PROP-67890", (9.861, 8.8369), P::Commercial, 1200, S::Unpaid, "Riyom", "Riyom"),
        PropertyRecord::mock("Alice Johnson", "PROP-54321", (9.9785, 8.8483), P::Industrial, 3500, S::PartiallyPaid, "Mikang", "Mikang"),
        PropertyRecord::mock("Sani Bulus", "PROP-66612", (9.9717, 8.8425), P::Agricultural, 8000, S::Paid, "Mikang", "Tunkus"),
        PropertyRecord::mock("Judith James", "PROP-56871", (9.9765, 8.8413), P::Residential, 450, S::Paid, "Mikang", "Mikang"),
        PropertyRecord::mock("Khadija Sani", "PROP-88001", (9.9254, 8.8242), P::MixedUse, 1800, S::Unpaid, "Jos North", "Jenta"),
        PropertyRecord::mock("Daniel Walker", "PROP-77721", (9.885_462, 8.943_817), P::Residential, 650, S::Exempt, "Jos South", "Bukuru"),
    ]
}

/// Demo property counts per LGA of Plateau State.
pub fn lga_distribution() -> Vec<LgaDistribution> {
    [
        ("Barkin Ladi", 3500),
        ("Bassa", 3200),
        ("Bokkos", 2800),
        ("Jos East", 1100),
        ("Jos North", 8900),
        ("Jos South", 5300),
        ("Kanam", 2000),
        ("Kanke", 1500),
        ("Langtang North", 2000),
        ("Langtang South", 1500),
        ("Mangu", 3008),
        ("Mikang", 800),
        ("Pankshin", 2990),
        ("Quanpan", 1400),
        ("Riyom", 600),
        ("Shendam", 1004),
        ("Wase", 2020),
    ]
    .into_iter()
    .map(|(lga, properties)| LgaDistribution {
        lga: lga.to_owned(),
        properties,
    })
    .collect()
}
