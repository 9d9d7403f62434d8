//! Tempo - desktop time-tracking companion.
//!
//! This crate implements Tempo's settings subsystem: the constrained IPC
//! bridge between the untrusted UI context and the privileged host
//! process, and the settings window bound through that bridge.
//!
//! ## Architecture
//!
//! Control flow is strictly one level deep:
//!
//! ```text
//! settings view ──▶ bridge ──▶ privileged host (settings store, monitor,
//!                                auto-launch, log writer)
//! ```
//!
//! The [`bridge`] exposes a closed catalog of named operations; the UI
//! cannot reach the transport with a channel the catalog doesn't name.
//! The [`gui`] settings form snapshots every preference once at mount,
//! writes toggles immediately, and debounces free-text writes. The
//! [`host`] module is an in-memory stand-in for the privileged side used
//! by the binary and the tests; the real store stays external.

pub mod bridge;
pub mod gui;
pub mod host;
pub mod prefs;

pub use bridge::{Bridge, Channel};
pub use prefs::{DomainPreference, FilterType};
