//! Account section: the API key field.

use std::time::Instant;

use eframe::egui::{self, RichText};

use crate::gui::theme::TEXT_PRIMARY;

use super::super::helpers::{render_section_frame, render_text_field};
use super::super::state::SettingsView;

/// Render the account section. The API key write is debounced; the field
/// itself updates on every keystroke.
pub fn render_account_section(ui: &mut egui::Ui, view: &mut SettingsView, now: Instant) {
    ui.label(RichText::new("Account").monospace().color(TEXT_PRIMARY));
    ui.add_space(8.0);

    render_section_frame(ui, |ui| {
        let response = render_text_field(ui, "API Key:", &mut view.api_key, 320.0, None);
        if response.changed() {
            let value = view.api_key.clone();
            view.edit_api_key(value, now);
        }
    });

    ui.add_space(24.0);
    ui.separator();
    ui.add_space(16.0);
}
