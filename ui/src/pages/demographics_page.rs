//! Demographics page: property mix headline numbers and ward demographics.

use egui::{Response, Ui};
use landgrid_business::grid::{Column, ColumnSet, GridError, TableConfig};
use landgrid_business::{
    DemographicsOverview, RegionDemographics, group_thousands, percent, region_demographics,
};

use crate::state::State;
use crate::utils::colors::{COLOR_AMBER, COLOR_BLUE, COLOR_GREEN, COLOR_PURPLE};
use crate::widgets::{self, DataTableState};

#[derive(Debug)]
pub struct DemographicsPage {
    pub overview: DemographicsOverview,
    pub rows: Vec<RegionDemographics>,
    pub columns: ColumnSet<RegionDemographics>,
    pub table: DataTableState,
}

impl DemographicsPage {
    pub fn new(config: &TableConfig) -> Result<Self, GridError> {
        Ok(Self {
            overview: DemographicsOverview::default(),
            rows: region_demographics(),
            columns: demographics_columns()?,
            table: DataTableState::new(config)?,
        })
    }
}

fn count_column(
    id: &str,
    header: &str,
    count: fn(&RegionDemographics) -> u32,
) -> Column<RegionDemographics> {
    Column::new(id, header, move |r: &RegionDemographics| count(r).into()).cell(
        move |ui, _, r| {
            ui.label(group_thousands(count(r).into()));
        },
    )
}

pub fn demographics_columns() -> Result<ColumnSet<RegionDemographics>, GridError> {
    ColumnSet::new(vec![
        Column::new("lga", "LGA", |r: &RegionDemographics| r.lga.as_str().into()),
        Column::new("ward", "Ward", |r: &RegionDemographics| r.ward.as_str().into()),
        count_column("total_properties", "Total Properties", |r| r.total_properties),
        count_column("residential", "Residential", |r| r.residential_count),
        count_column("commercial", "Commercial", |r| r.commercial_count),
        count_column("average_size", "Avg Size (sqm)", |r| r.average_property_size),
        Column::new(
            "multiple_ownership",
            "Multiple Ownership",
            |r: &RegionDemographics| r.multiple_ownership_percentage.into(),
        )
        .cell(|ui, _, r| {
            ui.label(percent(f64::from(r.multiple_ownership_percentage)));
        }),
    ])
}

/// Renders the demographics page.
pub fn demographics_page(state: &mut State, ui: &mut Ui) -> Response {
    let table_config = state.config.table().clone();
    let page = &mut state.demographics;

    ui.vertical(|ui| {
        ui.heading("Property Demographics Analysis");
        ui.add_space(12.0);

        let overview = page.overview;
        ui.horizontal_wrapped(|ui| {
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
                "Developed Properties",
                &group_thousands(overview.developed.into()),
                COLOR_PURPLE,
            );
            widgets::stat_card(
                ui,
                "Properties with Multiple Owners",
                &group_thousands(overview.multiple_owners.into()),
                COLOR_AMBER,
            );
        });

        ui.add_space(16.0);
        ui.strong("Regional Demographics");
        widgets::data_table(
            ui,
            "region_demographics",
            &mut page.table,
            Some(page.rows.as_slice()),
            &page.columns,
            &table_config,
        );
    })
    .response
}

#[cfg(test)]
mod demographics_page_test {
    use landgrid_business::grid::{TableState, project};

    use super::*;

    #[test]
    fn test_search_matches_ward() {
        let columns = demographics_columns().expect("columns should be valid");
        let rows = region_demographics();
        let mut state = TableState::default();
        state.set_search_query("bukuru");

        let view = project(&state, Some(rows.as_slice()), &columns);
        assert_eq!(view.filtered_count, 1);
        assert_eq!(
            view.rows.first().map(|row| rows[row.source_index].lga.as_str()),
            Some("Jos South")
        );
    }

    #[test]
    fn test_columns_are_valid() {
        let columns = demographics_columns().expect("columns should be valid");
        assert_eq!(columns.len(), 7);
    }
}
