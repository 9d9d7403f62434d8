//! Settings view state.
//!
//! All fields are snapshotted from the privileged side once, when the view
//! is created; the view is the only writer for each preference it owns and
//! never re-polls, so changes made elsewhere become visible on the next
//! mount. Toggle and selection changes write through the bridge
//! immediately; free-text edits are debounced per field.

use std::sync::Arc;
use std::time::Instant;

use crate::bridge::{Bridge, Channel, PendingReply};
use crate::prefs::{DomainPreference, FilterType};

use super::debounce::{Debouncer, QUIET_PERIOD};

/// Section/key of the API key in the external settings store.
const API_KEY_SECTION: &str = "settings";
const API_KEY_KEY: &str = "api_key";

/// Progress of the asynchronous app-version fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionStatus {
    Loading,
    Ready(String),
    Failed(String),
}

/// Mounted settings form. Local state mirrors the store's last-known
/// values; widgets bind to the public fields and report changes through
/// the methods below.
pub struct SettingsView {
    bridge: Arc<Bridge>,

    pub api_key: String,
    pub log_file_path: String,
    pub log_to_file: bool,
    pub launch_on_login: bool,
    /// Mount-time snapshot; gates the browser section and is never
    /// re-queried while mounted.
    pub browser_monitored: bool,
    pub domain_preference: DomainPreference,
    pub filter_type: FilterType,
    pub denylist: String,
    pub allowlist: String,

    version: VersionStatus,
    version_reply: Option<PendingReply>,

    api_key_debounce: Debouncer,
    denylist_debounce: Debouncer,
    allowlist_debounce: Debouncer,
}

impl SettingsView {
    /// Snapshot every preference with one bounded sync read each, and kick
    /// off the async version fetch.
    pub fn mount(bridge: Arc<Bridge>) -> Self {
        let api_key = bridge.get_setting(API_KEY_SECTION, API_KEY_KEY, false);
        let log_file_path = bridge.log_file_path();
        let log_to_file = bridge.should_log_to_file();
        let launch_on_login = bridge.should_launch_on_login();
        let browser_monitored = bridge.is_browser_monitored();
        let domain_preference = bridge.domain_preference();
        let filter_type = bridge.filter_type();
        let denylist = bridge.denylist();
        let allowlist = bridge.allowlist();
        let version_reply = Some(bridge.invoke(Channel::GetAppVersion, vec![]));

        Self {
            bridge,
            api_key,
            log_file_path,
            log_to_file,
            launch_on_login,
            browser_monitored,
            domain_preference,
            filter_type,
            denylist,
            allowlist,
            version: VersionStatus::Loading,
            version_reply,
            api_key_debounce: Debouncer::new(QUIET_PERIOD),
            denylist_debounce: Debouncer::new(QUIET_PERIOD),
            allowlist_debounce: Debouncer::new(QUIET_PERIOD),
        }
    }

    // ── Free-text fields (debounced writes) ────────────────────────────

    pub fn edit_api_key(&mut self, value: String, now: Instant) {
        self.api_key = value.clone();
        self.api_key_debounce.edit(value, now);
    }

    pub fn edit_denylist(&mut self, value: String, now: Instant) {
        self.denylist = value.clone();
        self.denylist_debounce.edit(value, now);
    }

    pub fn edit_allowlist(&mut self, value: String, now: Instant) {
        self.allowlist = value.clone();
        self.allowlist_debounce.edit(value, now);
    }

    // ── Toggles and selections (immediate writes) ──────────────────────

    pub fn set_log_to_file(&mut self, flag: bool) {
        self.bridge.set_should_log_to_file(flag);
        self.log_to_file = flag;
    }

    pub fn set_launch_on_login(&mut self, flag: bool) {
        self.bridge.set_should_launch_on_login(flag);
        self.launch_on_login = flag;
    }

    pub fn select_domain_preference(&mut self, pref: DomainPreference) {
        self.bridge.set_domain_preference(pref);
        self.domain_preference = pref;
    }

    pub fn select_filter_type(&mut self, filter: FilterType) {
        self.bridge.set_filter_type(filter);
        self.filter_type = filter;
    }

    // ── Frame-driven progress ──────────────────────────────────────────

    /// Fire debounced writes whose quiet period has elapsed and poll the
    /// version fetch. Called once per UI frame.
    pub fn tick(&mut self, now: Instant) {
        if let Some(value) = self.api_key_debounce.poll(now) {
            self.bridge
                .set_setting(API_KEY_SECTION, API_KEY_KEY, &value, false);
        }
        if let Some(value) = self.denylist_debounce.poll(now) {
            self.bridge.set_denylist(&value);
        }
        if let Some(value) = self.allowlist_debounce.poll(now) {
            self.bridge.set_allowlist(&value);
        }

        if let Some(reply) = &self.version_reply {
            if let Some(result) = reply.try_take() {
                self.version = match result {
                    Ok(value) => {
                        VersionStatus::Ready(value.as_str().unwrap_or_default().to_string())
                    }
                    // Host errors format as the bare host message, shown
                    // verbatim in the footer.
                    Err(e) => VersionStatus::Failed(e.to_string()),
                };
                self.version_reply = None;
            }
        }
    }

    pub fn version(&self) -> &VersionStatus {
        &self.version
    }

    /// True while a debounced write or the version fetch is outstanding;
    /// the app keeps requesting repaints so `tick` runs without input.
    pub fn has_pending_work(&self) -> bool {
        self.api_key_debounce.is_pending()
            || self.denylist_debounce.is_pending()
            || self.allowlist_debounce.is_pending()
            || self.version_reply.is_some()
    }

    /// Write out any pending debounced values immediately. Teardown policy
    /// is flush, not discard: the last keystrokes are never lost.
    pub fn flush_pending(&mut self) {
        if let Some(value) = self.api_key_debounce.flush() {
            self.bridge
                .set_setting(API_KEY_SECTION, API_KEY_KEY, &value, false);
        }
        if let Some(value) = self.denylist_debounce.flush() {
            self.bridge.set_denylist(&value);
        }
        if let Some(value) = self.allowlist_debounce.flush() {
            self.bridge.set_allowlist(&value);
        }
    }
}

impl Drop for SettingsView {
    fn drop(&mut self) {
        self.flush_pending();
    }
}
