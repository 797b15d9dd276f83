mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use app::LaunchDashApp;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    // Development builds log at debug unless RUST_LOG says otherwise.
    let default_filter = if cfg!(debug_assertions) { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // Never open the window on a partially loaded dataset.
    let dataset = data::loader::load_file(Path::new(config::DATA_PATH))
        .with_context(|| format!("loading {}", config::DATA_PATH))?;
    let dataset = Arc::new(dataset);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config::WINDOW_SIZE)
            .with_min_inner_size(config::WINDOW_MIN_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        config::WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchDashApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("running the dashboard window: {e}"))
}
