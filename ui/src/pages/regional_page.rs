//! Regional data page: region totals and ward-level figures.

use egui::{Response, Ui};
use landgrid_business::grid::{Column, ColumnSet, GridError, TableConfig};
use landgrid_business::{
    RegionSummary, RegionalOverview, group_thousands, naira, region_breakdown, region_summary,
};

use crate::state::State;
use crate::utils::colors::{COLOR_AMBER, COLOR_BLUE, COLOR_GREEN, COLOR_PURPLE, COLOR_TEAL};
use crate::widgets::{self, DataTableState};

#[derive(Debug)]
pub struct RegionalPage {
    pub overview: RegionalOverview,
    pub rows: Vec<RegionSummary>,
    pub columns: ColumnSet<RegionSummary>,
    pub table: DataTableState,
}

impl RegionalPage {
    pub fn new(config: &TableConfig) -> Result<Self, GridError> {
        let rows = region_summary();
        Ok(Self {
            overview: RegionalOverview::from_data(&region_breakdown(), &rows),
            rows,
            columns: regional_columns()?,
            table: DataTableState::new(config)?,
        })
    }
}

fn per_km2(value: u32) -> String {
    format!("{}/km²", group_thousands(value.into()))
}

pub fn regional_columns() -> Result<ColumnSet<RegionSummary>, GridError> {
    ColumnSet::new(vec![
        Column::new("lga", "LGA", |r: &RegionSummary| r.lga.as_str().into()),
        Column::new("ward", "Ward", |r: &RegionSummary| r.ward.as_str().into()),
        Column::new("total_properties", "Properties", |r: &RegionSummary| {
            r.total_properties.into()
        })
        .cell(|ui, _, r| {
            ui.label(group_thousands(r.total_properties.into()));
        }),
        Column::new("population", "Population", |r: &RegionSummary| {
            r.population.into()
        })
        .cell(|ui, _, r| {
            ui.label(group_thousands(r.population.into()));
        }),
        Column::new("land_area", "Area (km²)", |r: &RegionSummary| r.land_area.into()),
        Column::new("property_density", "Property Density", |r: &RegionSummary| {
            r.property_density.into()
        })
        .cell(|ui, _, r| {
            ui.label(per_km2(r.property_density));
        }),
        Column::new("population_density", "Population Density", |r: &RegionSummary| {
            r.population_density.into()
        })
        .cell(|ui, _, r| {
            ui.label(per_km2(r.population_density));
        }),
        Column::new("value_per_sq_meter", "Value/m²", |r: &RegionSummary| {
            r.value_per_sq_meter.into()
        })
        .cell(|ui, _, r| {
            ui.label(naira(r.value_per_sq_meter));
        }),
        Column::new("total_evaluation", "Total Evaluation", |r: &RegionSummary| {
            r.total_evaluation_price().into()
        })
        .cell(|ui, _, r| {
            ui.label(naira(r.total_evaluation_price()));
        }),
    ])
}

/// Renders the regional data page.
pub fn regional_page(state: &mut State, ui: &mut Ui) -> Response {
    let table_config = state.config.table().clone();
    let page = &mut state.regional;

    ui.vertical(|ui| {
        ui.heading("Regional Data Analysis");
        ui.add_space(12.0);

        let overview = page.overview;
        ui.horizontal_wrapped(|ui| {
            widgets::stat_card(
                ui,
                "Total Regions Analyzed",
                &overview.regions.to_string(),
                COLOR_BLUE,
            );
            widgets::stat_card(
                ui,
                "Total Properties",
                &group_thousands(overview.total_properties),
                COLOR_GREEN,
            );
            widgets::stat_card(
                ui,
                "Total Population",
                &group_thousands(overview.total_population),
                COLOR_PURPLE,
            );
            widgets::stat_card(
                ui,
                "Total Land Area",
                &format!("{} km²", group_thousands(overview.total_land_area)),
                COLOR_TEAL,
            );
            widgets::stat_card(
                ui,
                "Total Evaluation Value",
                &naira(overview.total_evaluation),
                COLOR_AMBER,
            );
        });

        ui.add_space(16.0);
        ui.strong("Detailed Regional Data");
        widgets::data_table(
            ui,
            "regional_summary",
            &mut page.table,
            Some(page.rows.as_slice()),
            &page.columns,
            &table_config,
        );
    })
    .response
}
