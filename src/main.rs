#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use pixel_paint::{PaintApp, PaintSession, SessionConfig};

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = SessionConfig::from_env().unwrap_or_else(|err| {
        log::error!("{}, falling back to defaults", err);
        SessionConfig::default()
    });
    let session =
        PaintSession::new(&config).map_err(|err| eframe::Error::AppCreation(Box::new(err)))?;

    let side = config.cell_size * config.dimension as f32;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([side + 220.0, side + 40.0])
            .with_min_inner_size([300.0, 220.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Pixel Paint",
        native_options,
        Box::new(|cc| Ok(Box::new(PaintApp::new(cc, config, session)))),
    )
}
