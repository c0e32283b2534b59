//! Summary card with a title and a big value.

use egui::{Color32, CornerRadius, Frame, Margin, Response, RichText, Ui};

const CARD_WIDTH: f32 = 180.0;

/// Renders a summary card. `accent` colors the title marker.
pub fn stat_card(ui: &mut Ui, title: &str, value: &str, accent: Color32) -> Response {
    Frame::group(ui.style())
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_min_width(CARD_WIDTH);
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("●").color(accent));
                    ui.label(RichText::new(title).weak());
                });
                ui.label(RichText::new(value).size(22.0).strong());
            });
        })
        .response
}
