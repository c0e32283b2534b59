use chrono::Utc;
use egui::{RichText, ScrollArea};
use landgrid_business::Route;

use crate::{pages, state::State};

/// The dashboard shell: top bar, side navigation and the current page.
pub struct LandgridApp {
    state: State,
}

impl LandgridApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for LandgridApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.state.config.title());
            });
        });

        egui::SidePanel::left("navigation")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.label(RichText::new("Navigation").weak());
                for route in Route::ALL {
                    if ui
                        .selectable_label(self.state.route == route, route.title())
                        .clicked()
                        && self.state.route != route
                    {
                        log::debug!("Navigating to {route:?}");
                        self.state.route = route;
                    }
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                let now = Utc::now();
                match self.state.route {
                    Route::Properties => pages::properties_page(&mut self.state, ui),
                    Route::Demographics => pages::demographics_page(&mut self.state, ui),
                    Route::Revenue => pages::revenue_page(&mut self.state, ui),
                    Route::RegionalData => pages::regional_page(&mut self.state, ui),
                    Route::Operations => pages::operations_page(&mut self.state, ui),
                    Route::Users => pages::users_page(&mut self.state, ui, now.date_naive()),
                    Route::DemandNotice => pages::demand_notice_page(&mut self.state, ui, now),
                };
            });
        });
    }
}
