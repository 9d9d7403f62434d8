//! Main GUI application using egui
//!
//! Tempo's settings window: a single settings form bound to the bridge.

use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui;

use crate::bridge::Bridge;

use super::settings::{SettingsView, render_settings};
use super::theme::BG_PRIMARY;

/// The eframe application. The settings view mounts once, when the window
/// is created.
pub struct TempoApp {
    bridge: Arc<Bridge>,
    settings: SettingsView,
}

impl TempoApp {
    pub fn new(cc: &eframe::CreationContext<'_>, bridge: Arc<Bridge>) -> Self {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = BG_PRIMARY;
        cc.egui_ctx.set_visuals(visuals);

        let settings = SettingsView::mount(Arc::clone(&bridge));
        Self { bridge, settings }
    }
}

impl eframe::App for TempoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Deliver pushed host events to any registered listeners.
        self.bridge.pump_events();

        let now = Instant::now();
        self.settings.tick(now);

        render_settings(ctx, &mut self.settings, now);

        // Quiet-period expiry and the version reply arrive without user
        // input; keep repainting while either is outstanding.
        if self.settings.has_pending_work() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}
