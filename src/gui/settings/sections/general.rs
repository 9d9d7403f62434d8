//! General section: launch-at-login and file-logging toggles.

use eframe::egui::{self, RichText};

use crate::gui::theme::TEXT_PRIMARY;

use super::super::helpers::{render_checkbox_field, render_section_frame};
use super::super::state::SettingsView;

/// Render the general section. Toggle changes write through the bridge
/// immediately.
pub fn render_general_section(ui: &mut egui::Ui, view: &mut SettingsView) {
    ui.label(RichText::new("General").monospace().color(TEXT_PRIMARY));
    ui.add_space(8.0);

    render_section_frame(ui, |ui| {
        let mut launch = view.launch_on_login;
        if render_checkbox_field(ui, &mut launch, "Launch at login", "") {
            view.set_launch_on_login(launch);
        }
        ui.add_space(4.0);

        let mut logging = view.log_to_file;
        let log_path = view.log_file_path.clone();
        if render_checkbox_field(ui, &mut logging, "Enable logging to", &log_path) {
            view.set_log_to_file(logging);
        }
    });

    ui.add_space(24.0);
    ui.separator();
    ui.add_space(16.0);
}
