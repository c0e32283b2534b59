//! Small colored status labels used inside table cells.

use egui::{Color32, CornerRadius, Frame, Margin, Response, RichText, Ui};
use landgrid_business::{PropertyType, RateLevel, TaxStatus, UserStatus, percent};

use crate::utils::colors::{
    COLOR_AMBER, COLOR_BLUE, COLOR_GRAY, COLOR_GREEN, COLOR_PURPLE, COLOR_RED, COLOR_TEAL,
};

/// Renders `label` as a rounded chip filled with `color`.
pub fn chip(ui: &mut Ui, label: &str, color: Color32) -> Response {
    Frame::NONE
        .fill(color.gamma_multiply(0.18))
        .stroke(egui::Stroke::new(1.0, color))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(label).small().color(color));
        })
        .response
}

pub fn property_type_color(property_type: PropertyType) -> Color32 {
    match property_type {
        PropertyType::Residential => COLOR_BLUE,
        PropertyType::Commercial => COLOR_GREEN,
        PropertyType::Industrial => COLOR_AMBER,
        PropertyType::Agricultural => COLOR_TEAL,
        PropertyType::MixedUse => COLOR_PURPLE,
    }
}

pub fn tax_status_color(status: TaxStatus) -> Color32 {
    match status {
        TaxStatus::Paid => COLOR_GREEN,
        TaxStatus::Unpaid => COLOR_RED,
        TaxStatus::PartiallyPaid => COLOR_AMBER,
        TaxStatus::Exempt => COLOR_TEAL,
    }
}

pub fn user_status_color(status: UserStatus) -> Color32 {
    match status {
        UserStatus::Active => COLOR_GREEN,
        UserStatus::Inactive => COLOR_GRAY,
        UserStatus::Suspended => COLOR_RED,
    }
}

pub fn rate_level_color(level: RateLevel) -> Color32 {
    match level {
        RateLevel::Good => COLOR_GREEN,
        RateLevel::Warning => COLOR_AMBER,
        RateLevel::Poor => COLOR_RED,
    }
}

/// Percentage chip colored by its grade.
pub fn rate_chip(ui: &mut Ui, rate: f64, level: RateLevel) -> Response {
    chip(ui, &percent(rate), rate_level_color(level))
}

#[cfg(test)]
mod chip_test {
    use egui_kittest::Harness;
    use kittest::Queryable;

    use super::*;

    #[test]
    fn test_chip_shows_label() {
        let mut harness = Harness::new_ui(|ui| {
            chip(ui, TaxStatus::PartiallyPaid.as_str(), tax_status_color(TaxStatus::PartiallyPaid));
        });
        harness.run();

        assert!(
            harness.query_by_label("Partially Paid").is_some(),
            "chip label should be rendered"
        );
    }

    #[test]
    fn test_rate_chip_shows_percentage() {
        let mut harness = Harness::new_ui(|ui| {
            rate_chip(ui, 2.1, RateLevel::Good);
        });
        harness.run();

        assert!(harness.query_by_label("2.1%").is_some(), "rate label rendered");
    }

    #[test]
    fn test_status_colors_are_distinct() {
        let colors = [
            tax_status_color(TaxStatus::Paid),
            tax_status_color(TaxStatus::Unpaid),
            tax_status_color(TaxStatus::PartiallyPaid),
            tax_status_color(TaxStatus::Exempt),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b, "each tax status has its own color");
            }
        }
    }
}
