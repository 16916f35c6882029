#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use image_drawer::{DrawerApp, EditorConfig};

fn main() -> eframe::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = EditorConfig::default();
    match config.to_json() {
        Ok(json) => log::debug!("Starting with config: {}", json),
        Err(err) => log::warn!("Could not serialize config: {}", err),
    }

    let title = config.title.clone();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size(config.window_size)
            .with_position(config.window_position),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        native_options,
        Box::new(|cc| Ok(Box::new(DrawerApp::new(cc, config)))),
    )
}
