//! GUI runner - launches the Tempo settings window.

use std::sync::Arc;

use anyhow::Result;
use eframe::egui;
use tracing::info;

use crate::bridge::Bridge;

use super::app::TempoApp;

/// Run the settings window against `bridge`. Blocks until the window is
/// closed.
pub fn run_gui(bridge: Arc<Bridge>) -> Result<()> {
    info!("starting settings window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 680.0])
            .with_min_inner_size([420.0, 480.0])
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "Settings",
        options,
        Box::new(move |cc| Ok(Box::new(TempoApp::new(cc, bridge)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
