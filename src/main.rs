#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::path::PathBuf;

use page_builder::{BuilderConfig, PageBuilderApp};

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional first argument: a JSON config file.
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = BuilderConfig::load_or_default(config_path.as_deref());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([800.0, 500.0])
            .with_title(config.window_title.clone()),
        ..Default::default()
    };
    let app_name = config.window_title.clone();
    eframe::run_native(
        &app_name,
        native_options,
        Box::new(move |cc| Ok(Box::new(PageBuilderApp::new(cc, config)))),
    )
}
