//! Pages module for the application.
//!
//! One page per [`Route`](landgrid_business::Route):
//! - `properties_page`: property records and LGA distribution
//! - `demographics_page`: property mix per ward
//! - `revenue_page`: revenue collection per LGA
//! - `regional_page`: ward population and valuation
//! - `operations_page`: enumerator performance
//! - `users_page`: enumerator management
//! - `demand_notice_page`: bulk demand notices

mod demand_notice_page;
mod demographics_page;
mod operations_page;
mod properties_page;
mod regional_page;
mod revenue_page;
mod users_page;

pub use demand_notice_page::demand_notice_page;
pub use demographics_page::{DemographicsPage, demographics_columns, demographics_page};
pub use operations_page::{OperationsPage, operations_columns, operations_page};
pub use properties_page::{PropertiesPage, properties_page, property_columns};
pub use regional_page::{RegionalPage, regional_columns, regional_page};
pub use revenue_page::{RevenuePage, revenue_columns, revenue_page};
pub use users_page::{UsersPage, user_columns, users_page};
