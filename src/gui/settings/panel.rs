//! Main settings panel rendering
//!
//! Contains the top-level render function for the settings view.

use std::time::Instant;

use eframe::egui::{self, RichText, ScrollArea};

use crate::gui::theme::{ACCENT_RED, BG_PRIMARY, TEXT_MUTED, TEXT_PRIMARY};

use super::sections::{render_account_section, render_browser_section, render_general_section};
use super::state::{SettingsView, VersionStatus};

/// Render the settings form.
pub fn render_settings(ctx: &egui::Context, view: &mut SettingsView, now: Instant) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(16.0))
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.label(
                    RichText::new("⚙ SETTINGS")
                        .monospace()
                        .size(18.0)
                        .color(TEXT_PRIMARY),
                );
                ui.add_space(16.0);

                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        render_account_section(ui, view, now);
                        render_general_section(ui, view);
                        render_browser_section(ui, view, now);
                        render_version_footer(ui, view);
                    });
            });
        });
}

/// Render the app-version footer: pending, failed, or resolved.
fn render_version_footer(ui: &mut egui::Ui, view: &SettingsView) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Version:").small().color(TEXT_MUTED));
        match view.version() {
            VersionStatus::Loading => {
                ui.label(RichText::new("Loading…").small().color(TEXT_MUTED));
            }
            VersionStatus::Failed(message) => {
                ui.label(RichText::new(message).small().color(ACCENT_RED));
            }
            VersionStatus::Ready(version) => {
                ui.label(RichText::new(version).small().color(TEXT_MUTED));
            }
        }
    });
}
