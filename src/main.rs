mod app;
mod chart;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::sync::Arc;

use anyhow::{Context, Result};
use app::GdpExplorerApp;
use config::AppConfig;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let config = AppConfig::default();

    // The dataset is unusable if any cell fails to parse, so a bad file stops startup here.
    let dataset = data::loader::load_dataset(&config.dataset_path)
        .with_context(|| format!("loading {}", config.dataset_path.display()))?;
    let state = AppState::new(Arc::new(dataset), config.clone())
        .context("building initial chart")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        &config.window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(GdpExplorerApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running the viewer: {e}"))
}
