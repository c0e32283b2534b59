//! Properties page: headline numbers, property records and LGA counts.

use egui::{Response, Ui};
use landgrid_business::grid::{CellValue, Column, ColumnSet, GridError, TableConfig};
use landgrid_business::{
    LgaDistribution, PropertyOverview, PropertyRecord, group_thousands, lga_distribution,
    mock_properties,
};

use crate::state::State;
use crate::utils::colors::{COLOR_AMBER, COLOR_BLUE, COLOR_GREEN, COLOR_PURPLE};
use crate::widgets::{self, DataTableState};

/// Rows, columns and table states of the properties page.
#[derive(Debug)]
pub struct PropertiesPage {
    pub overview: PropertyOverview,
    pub records: Vec<PropertyRecord>,
    pub columns: ColumnSet<PropertyRecord>,
    pub table: DataTableState,
    pub lga_rows: Vec<LgaDistribution>,
    pub lga_columns: ColumnSet<LgaDistribution>,
    pub lga_table: DataTableState,
}

impl PropertiesPage {
    pub fn new(config: &TableConfig) -> Result<Self, GridError> {
        Ok(Self {
            overview: PropertyOverview::default(),
            records: mock_properties(),
            columns: property_columns()?,
            table: DataTableState::new(config)?,
            lga_rows: lga_distribution(),
            lga_columns: lga_columns()?,
            lga_table: DataTableState::new(config)?,
        })
    }
}

pub fn property_columns() -> Result<ColumnSet<PropertyRecord>, GridError> {
    ColumnSet::new(vec![
        Column::new("owner_name", "Owner Name", |p: &PropertyRecord| {
            p.owner_name.as_str().into()
        }),
        Column::new("property_id", "Property ID", |p: &PropertyRecord| {
            p.property_id.as_str().into()
        }),
        Column::new("property_type", "Property Type", |p: &PropertyRecord| {
            p.property_type.as_str().into()
        })
        .cell(|ui, _, p| {
            widgets::chip(
                ui,
                p.property_type.as_str(),
                widgets::property_type_color(p.property_type),
            );
        }),
        Column::new("property_size", "Size (sqm)", |p: &PropertyRecord| {
            p.property_size.into()
        }),
        Column::new("tax_status", "Tax Status", |p: &PropertyRecord| {
            p.tax_status.as_str().into()
        })
        .cell(|ui, _, p| {
            widgets::chip(
                ui,
                p.tax_status.as_str(),
                widgets::tax_status_color(p.tax_status),
            );
        }),
        Column::new("lga", "LGA", |p: &PropertyRecord| p.lga.as_str().into()),
        Column::new("ward", "Ward", |p: &PropertyRecord| p.ward.as_str().into()),
    ])
}

fn lga_columns() -> Result<ColumnSet<LgaDistribution>, GridError> {
    ColumnSet::new(vec![
        Column::new("lga", "LGA", |row: &LgaDistribution| row.lga.as_str().into()),
        Column::new("properties", "Properties", |row: &LgaDistribution| {
            row.properties.into()
        })
        .searchable(false)
        .cell(|ui, value, _| {
            let count = match value {
                CellValue::Int(count) => u64::try_from(*count).unwrap_or_default(),
                _ => 0,
            };
            ui.label(group_thousands(count));
        }),
    ])
}

/// Renders the properties page.
pub fn properties_page(state: &mut State, ui: &mut Ui) -> Response {
    let table_config = state.config.table().clone();
    let page = &mut state.properties;

    ui.vertical(|ui| {
        ui.heading("Property Demographics");
        ui.add_space(12.0);

        ui.horizontal_wrapped(|ui| {
            let overview = page.overview;
            widgets::stat_card(
                ui,
                "Total Properties",
                &group_thousands(overview.total_properties.into()),
                COLOR_BLUE,
            );
            widgets::stat_card(
                ui,
                "Residential Properties",
                &group_thousands(overview.residential.into()),
                COLOR_GREEN,
            );
            widgets::stat_card(
                ui,
                "Commercial Properties",
                &group_thousands(overview.commercial.into()),
                COLOR_PURPLE,
            );
            widgets::stat_card(
                ui,
                "Industrial Properties",
                &group_thousands(overview.industrial.into()),
                COLOR_AMBER,
            );
        });

        ui.add_space(16.0);
        ui.strong("Property Records");
        widgets::data_table(
            ui,
            "property_records",
            &mut page.table,
            Some(page.records.as_slice()),
            &page.columns,
            &table_config,
        );

        ui.add_space(16.0);
        ui.strong("Distribution by LGA");
        widgets::data_table(
            ui,
            "lga_distribution",
            &mut page.lga_table,
            Some(page.lga_rows.as_slice()),
            &page.lga_columns,
            &table_config.clone().with_search_placeholder("Search LGA..."),
        );
    })
    .response
}
