//! GUI module for the Tempo settings window.
//!
//! A single eframe window hosting the settings form. All preference reads
//! and writes go through the bridge; nothing in this module talks to the
//! privileged side directly.

pub mod app;
pub mod runner;
pub mod settings;
pub mod theme;

pub use app::TempoApp;
pub use runner::run_gui;
pub use settings::{SettingsView, VersionStatus};
