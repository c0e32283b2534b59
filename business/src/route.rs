//! Route state for page navigation.

use serde::{Deserialize, Serialize};

/// Page shown in the central panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    #[default]
    Properties,
    Demographics,
    Revenue,
    RegionalData,
    /// Enumerator performance.
    Operations,
    /// Enumerator management.
    Users,
    DemandNotice,
}

impl Route {
    /// Navigation order of the side panel.
    pub const ALL: [Self; 7] = [
        Self::Properties,
        Self::Demographics,
        Self::Revenue,
        Self::RegionalData,
        Self::Operations,
        Self::Users,
        Self::DemandNotice,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Properties => "Properties",
            Self::Demographics => "Demographics",
            Self::Revenue => "Revenue",
            Self::RegionalData => "Regional Data",
            Self::Operations => "Operations",
            Self::Users => "Enumerators",
            Self::DemandNotice => "Demand Notice",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_default_is_properties() {
        assert_eq!(Route::default(), Route::Properties);
    }

    #[test]
    fn test_route_titles_are_unique() {
        let mut titles: Vec<_> = Route::ALL.iter().map(|route| route.title()).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), Route::ALL.len(), "one nav entry per route");
    }
}
