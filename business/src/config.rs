//! Dashboard configuration from `LANDGRID_*` environment variables.
//!
//! | Variable                      | Effect                                  |
//! |-------------------------------|-----------------------------------------|
//! | `LANDGRID_TITLE`              | Window and top bar title                |
//! | `LANDGRID_PAGE_SIZE`          | Default rows per page (must be > 0)     |
//! | `LANDGRID_NO_DATA_MESSAGE`    | Placeholder text of empty tables        |
//! | `LANDGRID_SEARCH_PLACEHOLDER` | Hint text of table search boxes         |

use std::env::vars;

use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::grid::TableConfig;

/// Prefix of every dashboard environment variable.
pub const ENV_PREFIX: &str = "LANDGRID_";

pub const DEFAULT_TITLE: &str = "Landgrid Admin";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration from environment: {0}")]
    Env(#[from] serde_env::Error),

    #[error("LANDGRID_PAGE_SIZE must be positive")]
    ZeroPageSize,
}

/// Validated dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    title: String,
    table: TableConfig,
}

// Environment values before validation. Unset variables stay `None`.
#[derive(Debug, Default, Deserialize)]
struct RawDashboardConfig {
    title: Option<String>,
    page_size: Option<usize>,
    no_data_message: Option<String>,
    search_placeholder: Option<String>,
}

impl DashboardConfig {
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Base options for every data table on the dashboard.
    pub fn table(&self) -> &TableConfig {
        &self.table
    }

    /// Read `LANDGRID_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(vars())
    }

    /// Read configuration from `(name, value)` pairs. Names without the
    /// `LANDGRID_` prefix are ignored.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let prefixed = vars.into_iter().filter_map(|(key, value)| {
            key.as_ref()
                .strip_prefix(ENV_PREFIX)
                .map(|name| (name.to_owned(), value.as_ref().to_owned()))
        });
        let raw: RawDashboardConfig = serde_env::from_iter(prefixed)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawDashboardConfig) -> Result<Self, ConfigError> {
        let RawDashboardConfig {
            title,
            page_size,
            no_data_message,
            search_placeholder,
        } = raw;

        let mut table = TableConfig::default();
        match page_size {
            Some(0) => {
                warn!("Rejecting LANDGRID_PAGE_SIZE=0");
                return Err(ConfigError::ZeroPageSize);
            }
            Some(size) => {
                info!("Using page size {size} from environment");
                table = table.with_page_size(size);
            }
            None => {}
        }
        if let Some(message) = no_data_message {
            table = table.with_no_data_message(message);
        }
        if let Some(placeholder) = search_placeholder {
            table = table.with_search_placeholder(placeholder);
        }

        Ok(Self {
            title: title.unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
            table,
        })
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            table: TableConfig::default(),
        }
    }
}
