#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use landgrid_business::DashboardConfig;
use landgrid_ui::state::State;

#[cfg(not(target_arch = "wasm32"))]
mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> eframe::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    let config = match DashboardConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Invalid dashboard configuration, using defaults: {err}");
            DashboardConfig::default()
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title())
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Landgrid",
        native_options,
        Box::new(move |_cc| {
            let state = State::new(config)?;
            let app = landgrid_ui::LandgridApp::new(state);
            Ok(Box::new(app))
        }),
    )
}
