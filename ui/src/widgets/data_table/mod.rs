//! Generic searchable, sortable, paginated data table.
//!
//! The widget is a thin renderer over the grid engine in
//! `landgrid_business::grid`:
//! - `search`: search box and loading indicator
//! - `header`: S/N and column headers with sort indicators
//! - `body`: data rows and the empty placeholder
//! - `pagination`: page label, page size selector and navigation buttons
//!
//! User input is collected as [`TableEvent`]s while drawing and applied once
//! the table has been drawn.

mod body;
mod header;
mod pagination;
mod search;

use std::hash::Hash;

use egui::{Id, Response, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};
use landgrid_business::grid::{
    ColumnSet, GridError, TableConfig, TableEvent, TableState, ViewMemo,
};
use log::warn;

pub use header::sort_label;
pub use pagination::page_label;

/// Width of the serial number column.
const SERIAL_WIDTH: f32 = 48.0;
const HEADER_HEIGHT: f32 = 28.0;

/// Per-table state kept by the host page across frames.
#[derive(Debug, Default)]
pub struct DataTableState {
    table: TableState,
    memo: ViewMemo,
}

impl DataTableState {
    /// Mount-time state for a table embedded with `config`.
    pub fn new(config: &TableConfig) -> Result<Self, GridError> {
        Ok(Self {
            table: TableState::from_config(config)?,
            memo: ViewMemo::new(),
        })
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    /// Mutable access for hosts that drive the table programmatically.
    pub fn table_mut(&mut self) -> &mut TableState {
        &mut self.table
    }

    /// Apply one user interaction.
    pub fn handle<T>(&mut self, event: TableEvent, columns: &ColumnSet<T>) -> Result<(), GridError> {
        self.table = self.table.apply(event, columns)?;
        Ok(())
    }

    /// Forget the cached projection, e.g. after editing rows in place.
    pub fn invalidate(&mut self) {
        self.memo.invalidate();
    }
}

/// Renders a data table for `rows` and applies the interactions of this
/// frame to `state`.
///
/// `rows = None` renders like an empty collection.
pub fn data_table<T>(
    ui: &mut Ui,
    id_salt: impl Hash,
    state: &mut DataTableState,
    rows: Option<&[T]>,
    columns: &ColumnSet<T>,
    config: &TableConfig,
) -> Response {
    let id = Id::new(id_salt);
    let mut events = Vec::new();

    let response = ui
        .vertical(|ui| {
            if config.enable_search || config.is_loading {
                search::render_toolbar(
                    ui,
                    state.table.search(),
                    config
                        .enable_search
                        .then_some(config.search_placeholder.as_str()),
                    config.is_loading,
                    &mut events,
                );
                ui.add_space(8.0);
            }

            let view = state.memo.view(&state.table, rows, columns);
            if view.page_index != state.table.page_index() {
                state.table.clamp_page_index(view.filtered_count);
            }

            let source = rows.unwrap_or_default();
            ui.push_id(id, |ui| {
                TableBuilder::new(ui)
                    .id_salt(id.with("table"))
                    .striped(true)
                    .column(TableColumn::exact(SERIAL_WIDTH))
                    .columns(
                        TableColumn::auto().at_least(80.0).resizable(true),
                        columns.len(),
                    )
                    .header(HEADER_HEIGHT, |mut header| {
                        header::render_header(
                            &mut header,
                            columns,
                            state.table.sort(),
                            config.enable_sorting,
                            &mut events,
                        );
                    })
                    .body(|body| body::render_rows(body, view, source, columns));
            });

            if view.is_empty() {
                body::render_placeholder(ui, &config.no_data_message);
            }

            if config.enable_pagination {
                ui.add_space(8.0);
                pagination::render_pagination(
                    ui,
                    id,
                    view,
                    state.table.page_size(),
                    &config.page_size_options,
                    &mut events,
                );
            }
        })
        .response;

    // Apply after drawing so the view borrow above has ended.
    for event in events {
        if let Err(err) = state.handle(event, columns) {
            warn!("Ignoring table event: {err}");
        }
    }

    response
}
