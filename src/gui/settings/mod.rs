//! Settings module for the GUI
//!
//! Renders the settings form where users can:
//! - Set the API key for the tracking service
//! - Toggle launch-at-login and file logging
//! - Configure browser tracking (domain preference, site filters),
//!   when a browser is being monitored

mod debounce;
mod helpers;
mod panel;
mod sections;
mod state;

pub use debounce::{Debouncer, QUIET_PERIOD};
pub use panel::render_settings;
pub use state::{SettingsView, VersionStatus};
