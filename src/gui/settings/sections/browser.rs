//! Browser tracking section: domain preference, filter type, and the
//! allow/deny list editors.
//!
//! Shown only when a browser was being monitored at mount time; the flag
//! is a one-time snapshot, so enabling monitoring elsewhere takes effect
//! on the next mount.

use std::time::Instant;

use eframe::egui::{self, RichText};

use crate::gui::theme::{TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY};
use crate::prefs::{DomainPreference, FilterType};

use super::super::helpers::{render_list_editor, render_section_frame, render_tab_row};
use super::super::state::SettingsView;

/// Render the browser tracking section, or nothing if no browser was
/// monitored at mount.
pub fn render_browser_section(ui: &mut egui::Ui, view: &mut SettingsView, now: Instant) {
    if !view.browser_monitored {
        return;
    }

    ui.label(
        RichText::new("Browser Tracking")
            .monospace()
            .color(TEXT_PRIMARY),
    );
    ui.add_space(8.0);
    ui.label(
        RichText::new(
            "These settings apply because you've enabled monitoring a browser \
             in the Monitored Apps menu.",
        )
        .color(TEXT_DIM),
    );
    ui.add_space(12.0);

    render_section_frame(ui, |ui| {
        ui.label(RichText::new("Browser Tracking:").color(TEXT_MUTED));
        if let Some(pref) = render_tab_row(
            ui,
            view.domain_preference,
            &[
                (DomainPreference::Domain, "Domain Only"),
                (DomainPreference::Url, "Full URL"),
            ],
        ) {
            view.select_domain_preference(pref);
        }
        ui.add_space(12.0);

        ui.label(RichText::new("Browser Filter:").color(TEXT_MUTED));
        if let Some(filter) = render_tab_row(
            ui,
            view.filter_type,
            &[
                (FilterType::Denylist, "All except denied sites"),
                (FilterType::Allowlist, "Only allowed sites"),
            ],
        ) {
            view.select_filter_type(filter);
        }
        ui.add_space(8.0);

        // Both editors keep their text while hidden; only the active
        // filter's editor is shown.
        match view.filter_type {
            FilterType::Denylist => {
                let response = render_list_editor(
                    ui,
                    "Denylist",
                    &mut view.denylist,
                    "Sites that you don't want to show in your reports. Only \
                     applicable to browsing activity. One regex per line.",
                );
                if response.changed() {
                    let value = view.denylist.clone();
                    view.edit_denylist(value, now);
                }
            }
            FilterType::Allowlist => {
                let response = render_list_editor(
                    ui,
                    "Allowlist",
                    &mut view.allowlist,
                    "Sites that you want to show in your reports. Only \
                     applicable to browsing activity. One regex per line.",
                );
                if response.changed() {
                    let value = view.allowlist.clone();
                    view.edit_allowlist(value, now);
                }
            }
        }
    });

    ui.add_space(24.0);
    ui.separator();
    ui.add_space(16.0);
}
