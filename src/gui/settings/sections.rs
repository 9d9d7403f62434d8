//! Settings section render functions
//!
//! Each function renders a distinct section of the settings form.

mod account;
mod browser;
mod general;

pub use account::render_account_section;
pub use browser::render_browser_section;
pub use general::render_general_section;
