//! Operational efficiency page: enumeration progress and per-enumerator
//! performance.

use egui::{Response, Ui};
use landgrid_business::grid::{Column, ColumnSet, GridError, TableConfig};
use landgrid_business::{
    EnumeratorPerformance, OperationsOverview, enumerator_performance, group_thousands, percent,
};

use crate::state::State;
use crate::utils::colors::{COLOR_AMBER, COLOR_BLUE, COLOR_GREEN, COLOR_RED};
use crate::widgets::{self, DataTableState};

#[derive(Debug)]
pub struct OperationsPage {
    pub overview: OperationsOverview,
    pub rows: Vec<EnumeratorPerformance>,
    pub columns: ColumnSet<EnumeratorPerformance>,
    pub table: DataTableState,
}

impl OperationsPage {
    pub fn new(config: &TableConfig) -> Result<Self, GridError> {
        Ok(Self {
            overview: OperationsOverview::default(),
            rows: enumerator_performance(),
            columns: operations_columns()?,
            table: DataTableState::new(config)?,
        })
    }
}

pub fn operations_columns() -> Result<ColumnSet<EnumeratorPerformance>, GridError> {
    ColumnSet::new(vec![
        Column::new("name", "Enumerator", |e: &EnumeratorPerformance| {
            e.name.as_str().into()
        }),
        Column::new("region", "Region", |e: &EnumeratorPerformance| {
            e.region.as_str().into()
        }),
        Column::new(
            "properties_enumerated",
            "Properties Enumerated",
            |e: &EnumeratorPerformance| e.properties_enumerated.into(),
        ),
        Column::new("validation_rate", "Validation Rate", |e: &EnumeratorPerformance| {
            e.validation_rate.into()
        })
        .cell(|ui, _, e| {
            widgets::rate_chip(ui, f64::from(e.validation_rate), e.validation_level());
        }),
        Column::new("error_rate", "Error Rate", |e: &EnumeratorPerformance| {
            e.error_rate.into()
        })
        .cell(|ui, _, e| {
            widgets::rate_chip(ui, e.error_rate, e.error_level());
        }),
        Column::new("average_time", "Avg. Time", |e: &EnumeratorPerformance| {
            e.average_minutes_per_property.into()
        })
        .cell(|ui, _, e| {
            ui.label(format!("{} mins", e.average_minutes_per_property));
        }),
        Column::new("last_active", "Last Active", |e: &EnumeratorPerformance| {
            e.last_active.as_str().into()
        }),
    ])
}

/// Renders the operations page.
pub fn operations_page(state: &mut State, ui: &mut Ui) -> Response {
    let table_config = state.config.table().clone();
    let page = &mut state.operations;

    ui.vertical(|ui| {
        ui.heading("Operational Efficiency");
        ui.add_space(12.0);

        let overview = page.overview;
        ui.horizontal_wrapped(|ui| {
            widgets::stat_card(
                ui,
                "Total Enumerators",
                &overview.total_enumerators.to_string(),
                COLOR_BLUE,
            );
            widgets::stat_card(
                ui,
                "Properties Enumerated",
                &group_thousands(overview.properties_enumerated.into()),
                COLOR_GREEN,
            );
            widgets::stat_card(
                ui,
                "Validation Rate",
                &percent(f64::from(overview.validation_rate)),
                COLOR_AMBER,
            );
            widgets::stat_card(
                ui,
                "Pending Validations",
                &overview.pending_validations.to_string(),
                COLOR_RED,
            );
        });

        ui.add_space(16.0);
        ui.strong("Enumerator Performance");
        widgets::data_table(
            ui,
            "enumerator_performance",
            &mut page.table,
            Some(page.rows.as_slice()),
            &page.columns,
            &table_config,
        );
    })
    .response
}

#[cfg(test)]
mod operations_page_test {
    use landgrid_business::grid::{SortDirection, TableState, project};

    use super::*;

    #[test]
    fn test_error_rate_sorts_as_number() {
        let columns = operations_columns().expect("columns should be valid");
        let rows = enumerator_performance();
        let mut state = TableState::default();
        state.toggle_sort(&columns, "error_rate");
        state.toggle_sort(&columns, "error_rate");
        assert_eq!(state.sort().direction(), Some(SortDirection::Descending));

        let view = project(&state, Some(rows.as_slice()), &columns);
        let worst = view.rows.first().map(|row| rows[row.source_index].name.as_str());
        assert_eq!(worst, Some("Mohammed Ibrahim"));
    }
}
