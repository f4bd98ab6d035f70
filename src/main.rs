//! Mancala GUI
//!
//! Play Kalah against the computer in a native window.

use std::path::Path;

use anyhow::{Context, Result};
use mancala::config::{AppConfig, DEFAULT_CONFIG_PATH};
use mancala::ui::MancalaApp;

fn main() -> Result<()> {
    mancala::logging::init();

    let config = AppConfig::load_or_default(Path::new(DEFAULT_CONFIG_PATH))
        .context("failed to load configuration")?;
    tracing::info!(
        depth = config.ai.depth,
        human_side = %config.game.human_side,
        "starting mancala"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 700.0])
            .with_min_inner_size([900.0, 500.0])
            .with_title("Mancala"),
        ..Default::default()
    };

    eframe::run_native(
        "Mancala",
        options,
        Box::new(move |cc| Ok(Box::new(MancalaApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run GUI: {e}"))
}
