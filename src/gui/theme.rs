//! Color constants for the Tempo settings window.

use eframe::egui::Color32;

/// Window background
pub const BG_PRIMARY: Color32 = Color32::from_rgb(22, 24, 28);
/// Secondary background for section frames
pub const BG_SECONDARY: Color32 = Color32::from_rgb(30, 33, 39);

/// Primary text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(222, 226, 230);
/// Secondary text
pub const TEXT_DIM: Color32 = Color32::from_rgb(160, 166, 175);
/// Muted text (captions, hints)
pub const TEXT_MUTED: Color32 = Color32::from_rgb(110, 117, 128);

pub const ACCENT_GREEN: Color32 = Color32::from_rgb(92, 220, 130);
pub const ACCENT_RED: Color32 = Color32::from_rgb(235, 100, 100);
