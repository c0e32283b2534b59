//! Data rows and the empty-table placeholder.

use egui::{Align, Layout, RichText, Ui};
use egui_extras::TableBody;
use landgrid_business::grid::{ColumnSet, TableView};

use crate::utils::colors::COLOR_GRAY;

/// Height of a data row.
pub const ROW_HEIGHT: f32 = 28.0;

/// Height of the placeholder row shown when no rows match.
pub const PLACEHOLDER_HEIGHT: f32 = 72.0;

/// Renders one table row per visible row: the serial number, then each
/// column's cell.
pub fn render_rows<T>(body: TableBody<'_>, view: &TableView, rows: &[T], columns: &ColumnSet<T>) {
    body.rows(ROW_HEIGHT, view.rows.len(), |mut row| {
        let Some(visible) = view.rows.get(row.index()) else {
            return;
        };
        let Some(record) = rows.get(visible.source_index) else {
            return;
        };

        row.col(|ui| {
            ui.label(RichText::new(visible.serial.to_string()).monospace());
        });

        for column in columns {
            let value = column.value(record);
            row.col(|ui| match column.cell_renderer() {
                Some(render) => render(ui, &value, record),
                None => {
                    ui.label(value.search_text());
                }
            });
        }
    });
}

/// Renders the single centered row shown instead of data rows.
pub fn render_placeholder(ui: &mut Ui, message: &str) {
    ui.allocate_ui_with_layout(
        egui::vec2(ui.available_width(), PLACEHOLDER_HEIGHT),
        Layout::centered_and_justified(egui::Direction::TopDown).with_cross_align(Align::Center),
        |ui| {
            ui.label(RichText::new(message).color(COLOR_GRAY));
        },
    );
}
