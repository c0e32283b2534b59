//! Header row of the data table.

use egui::{Button, RichText, Ui};
use egui_extras::TableRow;
use landgrid_business::grid::{
    ColumnHeader, ColumnSet, SERIAL_COLUMN_HEADER, SortState, TableEvent,
};

use crate::utils::colors::COLOR_HEADER_BG;

/// Header text for a sortable column, with the direction arrow when it is
/// the sorted column.
pub fn sort_label(label: &str, sort: &SortState, column_id: &str) -> String {
    match sort.direction_of(column_id) {
        Some(direction) => format!("{label} {}", direction.indicator()),
        None => label.to_owned(),
    }
}

/// Renders the serial number header followed by one header per column.
///
/// With `enable_sorting`, sortable headers are buttons that push a
/// [`TableEvent::ToggleSort`].
pub fn render_header<T>(
    header: &mut TableRow<'_, '_>,
    columns: &ColumnSet<T>,
    sort: &SortState,
    enable_sorting: bool,
    events: &mut Vec<TableEvent>,
) {
    header.col(|ui| {
        fill_header_background(ui);
        ui.label(header_text(SERIAL_COLUMN_HEADER));
    });

    for column in columns {
        header.col(|ui| {
            fill_header_background(ui);

            if let ColumnHeader::Custom { render, .. } = &column.header {
                ui.horizontal(|ui| {
                    render(ui);
                    if enable_sorting && column.sortable {
                        let arrow = sort
                            .direction_of(&column.id)
                            .map_or("↕", |direction| direction.indicator());
                        if ui.add(Button::new(header_text(arrow)).frame(false)).clicked() {
                            events.push(TableEvent::ToggleSort(column.id.clone()));
                        }
                    }
                });
                return;
            }

            let label = column.header.label();
            if enable_sorting && column.sortable {
                let text = sort_label(label, sort, &column.id);
                if ui
                    .add(Button::new(header_text(&text)).frame(false))
                    .on_hover_text("Sort")
                    .clicked()
                {
                    events.push(TableEvent::ToggleSort(column.id.clone()));
                }
            } else {
                ui.label(header_text(label));
            }
        });
    }
}

fn header_text(text: &str) -> RichText {
    RichText::new(text).strong().color(egui::Color32::WHITE)
}

fn fill_header_background(ui: &mut Ui) {
    let rect = ui.max_rect();
    ui.painter().rect_filled(rect, 0.0, COLOR_HEADER_BG);
}
