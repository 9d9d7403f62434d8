//! UI helper functions for settings rendering
//!
//! Provides reusable UI components for the settings panel.

use eframe::egui::{self, RichText};

use crate::gui::theme::{BG_SECONDARY, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY};

/// Render a labeled single-line text input field. Returns the edit
/// widget's response so callers can react to changes.
pub fn render_text_field(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    width: f32,
    hint: Option<&str>,
) -> egui::Response {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).color(TEXT_MUTED));
        let mut edit = egui::TextEdit::singleline(value)
            .font(egui::TextStyle::Monospace)
            .text_color(TEXT_PRIMARY)
            .desired_width(width);
        if let Some(h) = hint {
            edit = edit.hint_text(h);
        }
        ui.add(edit)
    })
    .inner
}

/// Render a multi-line text editor with a caption underneath. Returns the
/// edit widget's response.
pub fn render_list_editor(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    caption: &str,
) -> egui::Response {
    ui.label(RichText::new(label).color(TEXT_MUTED));
    let response = ui.add(
        egui::TextEdit::multiline(value)
            .font(egui::TextStyle::Monospace)
            .text_color(TEXT_PRIMARY)
            .desired_width(f32::INFINITY)
            .desired_rows(6),
    );
    ui.label(RichText::new(caption).small().color(TEXT_MUTED));
    response
}

/// Render a labeled checkbox with description. Returns whether the value
/// changed this frame.
pub fn render_checkbox_field(
    ui: &mut egui::Ui,
    value: &mut bool,
    label: &str,
    description: &str,
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        changed = ui.checkbox(value, "").changed();
        ui.label(RichText::new(label).color(TEXT_DIM));
        ui.label(RichText::new(description).small().color(TEXT_MUTED));
    });
    changed
}

/// Render a row of mutually exclusive tabs for an enumeration. Returns the
/// newly selected value when a different tab was clicked.
pub fn render_tab_row<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    current: T,
    options: &[(T, &str)],
) -> Option<T> {
    let mut selected = None;
    ui.horizontal(|ui| {
        for (value, label) in options {
            if ui
                .selectable_label(current == *value, *label)
                .clicked()
                && current != *value
            {
                selected = Some(*value);
            }
        }
    });
    selected
}

/// Render a section frame with secondary background
pub fn render_section_frame<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::NONE
        .fill(BG_SECONDARY)
        .corner_radius(4.0)
        .inner_margin(12.0)
        .show(ui, add_contents)
        .inner
}
