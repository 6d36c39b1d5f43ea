mod app;
mod charts;
mod data;
mod state;
mod theme;
mod ui;

use std::path::PathBuf;

use anyhow::{bail, Context};
use app::ReviewScopeApp;
use eframe::egui;

/// Dataset read when no path argument is given.
const DEFAULT_DATA_PATH: &str = "amazon.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

    let dataset = data::loader::load_reviews(&path)
        .with_context(|| format!("failed to load reviews from {}", path.display()))?;
    if dataset.categories.is_empty() {
        // The default selection is the first category; with none, there
        // is nothing the dashboard could show.
        bail!("no usable records in {}", path.display());
    }
    log::info!(
        "loaded {} products across {} categories",
        dataset.len(),
        dataset.categories.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Amazon Product Review Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(ReviewScopeApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("dashboard window failed: {e}"))
}
