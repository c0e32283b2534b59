//! Search box and loading indicator above the table.

use egui::{Align, Layout, TextEdit, Ui};
use landgrid_business::grid::TableEvent;

/// Width of the search box.
const SEARCH_WIDTH: f32 = 240.0;

/// Renders the toolbar row: loading indicator on the left, search box on the
/// right. Edits push a [`TableEvent::SetSearchQuery`].
pub fn render_toolbar(
    ui: &mut Ui,
    query: &str,
    placeholder: Option<&str>,
    is_loading: bool,
    events: &mut Vec<TableEvent>,
) {
    ui.horizontal(|ui| {
        if is_loading {
            ui.spinner();
            ui.label("Loading...");
        }

        let Some(placeholder) = placeholder else {
            return;
        };

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let mut text = query.to_owned();
            let response = ui.add(
                TextEdit::singleline(&mut text)
                    .hint_text(placeholder)
                    .desired_width(SEARCH_WIDTH),
            );
            ui.label("🔍");
            if response.changed() {
                events.push(TableEvent::SetSearchQuery(text));
            }
        });
    });
}
