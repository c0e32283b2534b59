use landgrid_business::grid::GridError;
use landgrid_business::{DashboardConfig, DemandNoticeState, Route, mock_owners};

use crate::pages::{
    DemographicsPage, OperationsPage, PropertiesPage, RegionalPage, RevenuePage, UsersPage,
};

/// The main application state.
#[derive(Debug)]
pub struct State {
    /// The page shown in the central panel.
    pub route: Route,
    pub config: DashboardConfig,
    pub properties: PropertiesPage,
    pub demographics: DemographicsPage,
    pub revenue: RevenuePage,
    pub regional: RegionalPage,
    pub operations: OperationsPage,
    pub users: UsersPage,
    pub demand_notice: DemandNoticeState,
}

impl State {
    /// Build every page with the table options of `config`.
    pub fn new(config: DashboardConfig) -> Result<Self, GridError> {
        Ok(Self {
            route: Route::default(),
            properties: PropertiesPage::new(config.table())?,
            demographics: DemographicsPage::new(config.table())?,
            revenue: RevenuePage::new(config.table())?,
            regional: RegionalPage::new(config.table())?,
            operations: OperationsPage::new(config.table())?,
            users: UsersPage::new(config.table())?,
            demand_notice: DemandNoticeState::new(mock_owners()),
            config,
        })
    }

    /// State with default configuration, for tests.
    pub fn test() -> Result<Self, GridError> {
        Self::new(DashboardConfig::default())
    }
}
