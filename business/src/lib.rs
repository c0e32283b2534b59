//! Business logic of the Landgrid admin dashboard.
//!
//! UI crates render what lives here and feed user input back; nothing in this
//! crate draws except the column renderer hooks in [`grid`].

mod config;
mod demographics;
mod format;
pub mod grid;
mod notice;
mod operations;
mod property;
mod rate;
mod regional;
mod revenue;
mod route;
mod users;

pub use config::{ConfigError, DEFAULT_TITLE, DashboardConfig, ENV_PREFIX};
pub use demographics::{DemographicsOverview, RegionDemographics, region_demographics};
pub use format::{group_thousands, naira, percent};
pub use notice::{
    DemandNoticeState, NoticeAnalytics, NoticeTemplate, PropertyOwner, SENT_BANNER_SECONDS,
    mock_owners, render_template,
};
pub use operations::{EnumeratorPerformance, OperationsOverview, enumerator_performance};
pub use property::{
    LgaDistribution, PropertyOverview, PropertyRecord, PropertyType, TaxStatus, lga_distribution,
    mock_properties,
};
pub use rate::RateLevel;
pub use regional::{
    RegionBreakdown, RegionSummary, RegionalOverview, region_breakdown, region_summary,
};
pub use revenue::{RevenueOverview, RevenueSummary, revenue_summary};
pub use route::Route;
pub use users::{
    AddUserError, DEFAULT_LGA, DEFAULT_WARD, UserFilter, UserRecord, UserStats, UserStatus,
    UsersState, mock_users,
};
