//! Pagination bar below the table.

use egui::{Align, ComboBox, Layout, Ui};
use landgrid_business::grid::{TableEvent, TableView};

/// Renders "Page X of Y", the rows-per-page selector and the navigation
/// buttons. Buttons are disabled at the first/last page.
pub fn render_pagination(
    ui: &mut Ui,
    id_salt: egui::Id,
    view: &TableView,
    page_size: usize,
    page_size_options: &[usize],
    events: &mut Vec<TableEvent>,
) {
    ui.horizontal(|ui| {
        ui.label(page_label(view));

        ComboBox::from_id_salt(id_salt.with("page_size"))
            .selected_text(format!("Show {page_size}"))
            .show_ui(ui, |ui| {
                for &option in page_size_options {
                    if ui
                        .selectable_label(option == page_size, format!("Show {option}"))
                        .clicked()
                        && option != page_size
                    {
                        events.push(TableEvent::SetPageSize(option));
                    }
                }
            });

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            // Right-to-left: added in reverse visual order.
            let last = view.page_count.saturating_sub(1);
            if ui.add_enabled(!view.is_last_page(), egui::Button::new("Last")).clicked() {
                events.push(TableEvent::SetPage(last));
            }
            if ui.add_enabled(!view.is_last_page(), egui::Button::new("Next")).clicked() {
                events.push(TableEvent::SetPage(view.page_index + 1));
            }
            if ui
                .add_enabled(!view.is_first_page(), egui::Button::new("Previous"))
                .clicked()
            {
                events.push(TableEvent::SetPage(view.page_index.saturating_sub(1)));
            }
            if ui.add_enabled(!view.is_first_page(), egui::Button::new("First")).clicked() {
                events.push(TableEvent::SetPage(0));
            }
        });
    });
}

/// "Page X of Y" for the projected view.
pub fn page_label(view: &TableView) -> String {
    format!("Page {} of {}", view.page_index + 1, view.page_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_label_is_one_based() {
        let view = TableView {
            page_index: 1,
            page_count: 3,
            page_size: 10,
            ..TableView::default()
        };
        assert_eq!(page_label(&view), "Page 2 of 3");
    }

    #[test]
    fn test_empty_view_is_page_one_of_one() {
        let view = TableView {
            page_count: 1,
            ..TableView::default()
        };
        assert_eq!(page_label(&view), "Page 1 of 1");
    }
}
