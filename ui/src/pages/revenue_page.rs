//! Revenue page: collection headline numbers and the per-LGA summary.

use egui::{Response, Ui};
use landgrid_business::grid::{Column, ColumnSet, GridError, TableConfig};
use landgrid_business::{
    RevenueOverview, RevenueSummary, group_thousands, naira, percent, revenue_summary,
};

use crate::state::State;
use crate::utils::colors::{COLOR_AMBER, COLOR_BLUE, COLOR_GREEN, COLOR_RED};
use crate::widgets::{self, DataTableState};

#[derive(Debug)]
pub struct RevenuePage {
    pub overview: RevenueOverview,
    pub rows: Vec<RevenueSummary>,
    pub columns: ColumnSet<RevenueSummary>,
    pub table: DataTableState,
}

impl RevenuePage {
    pub fn new(config: &TableConfig) -> Result<Self, GridError> {
        Ok(Self {
            overview: RevenueOverview::default(),
            rows: revenue_summary(),
            columns: revenue_columns()?,
            table: DataTableState::new(config)?,
        })
    }
}

pub fn revenue_columns() -> Result<ColumnSet<RevenueSummary>, GridError> {
    ColumnSet::new(vec![
        Column::new("lga", "LGA", |r: &RevenueSummary| r.lga.as_str().into()),
        Column::new("total_properties", "Properties", |r: &RevenueSummary| {
            r.total_properties.into()
        })
        .cell(|ui, _, r| {
            ui.label(group_thousands(r.total_properties.into()));
        }),
        Column::new("potential_revenue", "Potential Revenue", |r: &RevenueSummary| {
            r.potential_revenue.into()
        })
        .cell(|ui, _, r| {
            ui.label(naira(r.potential_revenue));
        }),
        Column::new("actual_revenue", "Actual Revenue", |r: &RevenueSummary| {
            r.actual_revenue.into()
        })
        .cell(|ui, _, r| {
            ui.label(naira(r.actual_revenue));
        }),
        Column::new("tax_compliance_rate", "Compliance Rate", |r: &RevenueSummary| {
            r.tax_compliance_rate.into()
        })
        .cell(|ui, _, r| {
            widgets::rate_chip(ui, f64::from(r.tax_compliance_rate), r.compliance_level());
        }),
        Column::new("tax_loss_due_to_vacant", "Loss (Vacant)", |r: &RevenueSummary| {
            r.tax_loss_due_to_vacant.into()
        })
        .cell(|ui, _, r| {
            ui.label(naira(r.tax_loss_due_to_vacant));
        }),
        Column::new(
            "tax_loss_due_to_undeveloped",
            "Loss (Undeveloped)",
            |r: &RevenueSummary| r.tax_loss_due_to_undeveloped.into(),
        )
        .cell(|ui, _, r| {
            ui.label(naira(r.tax_loss_due_to_undeveloped));
        }),
    ])
}

/// Renders the revenue page.
pub fn revenue_page(state: &mut State, ui: &mut Ui) -> Response {
    let table_config = state.config.table().clone();
    let page = &mut state.revenue;

    ui.vertical(|ui| {
        ui.heading("Revenue Analysis");
        ui.add_space(12.0);

        let overview = page.overview;
        ui.horizontal_wrapped(|ui| {
            widgets::stat_card(
                ui,
                "Total Potential Revenue",
                &naira(overview.total_potential_revenue),
                COLOR_BLUE,
            );
            widgets::stat_card(
                ui,
                "Actual Revenue Collected",
                &naira(overview.actual_revenue),
                COLOR_GREEN,
            );
            widgets::stat_card(
                ui,
                "Tax Compliance Rate",
                &percent(f64::from(overview.compliance_rate)),
                COLOR_AMBER,
            );
            widgets::stat_card(ui, "Revenue Loss", &naira(overview.revenue_loss), COLOR_RED);
        });

        ui.add_space(16.0);
        ui.strong("Revenue Summary by Region");
        widgets::data_table(
            ui,
            "revenue_summary",
            &mut page.table,
            Some(page.rows.as_slice()),
            &page.columns,
            &table_config,
        );
    })
    .response
}

#[cfg(test)]
mod revenue_page_test {
    use landgrid_business::grid::{CellValue, SortState, TableState, project};

    use super::*;

    #[test]
    fn test_revenue_columns_sort_amounts_numerically() {
        let columns = revenue_columns().expect("columns should be valid");
        let rows = revenue_summary();
        let mut state = TableState::default();
        state.toggle_sort(&columns, "actual_revenue");
        assert_eq!(state.sort(), &SortState::ascending("actual_revenue"));

        let view = project(&state, Some(rows.as_slice()), &columns);
        let lgas: Vec<_> = view
            .rows
            .iter()
            .map(|row| rows[row.source_index].lga.as_str())
            .collect();
        assert_eq!(lgas, vec!["Bokkos", "Barkin Ladi", "Mangu", "Jos South", "Jos North"]);

        let first = rows.first().expect("mock rows exist");
        assert_eq!(
            columns.get("potential_revenue").map(|c| c.value(first)),
            Some(CellValue::Int(8_500_000))
        );
    }
}
