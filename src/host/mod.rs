//! Demo privileged side of the bridge.
//!
//! The real main process owns the settings store, the monitor subsystem,
//! the app enumerator, the auto-launch integration, and the log writer;
//! from this subsystem's point of view those are opaque collaborators
//! behind IPC channels. This module stands in for them with an in-memory
//! [`HostState`] and one handler per channel, so the binary runs and the
//! settings view can be exercised end to end. No persistence format is
//! modeled.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use crate::bridge::{Channel, HostEndpoint};
use crate::prefs::{DomainPreference, FilterType};

/// In-memory preference state, keyed the way the external store is:
/// section/key for free-form settings, dedicated fields for everything the
/// main process owns directly.
#[derive(Debug, Clone)]
pub struct HostState {
    pub settings: HashMap<(String, String), String>,
    pub monitored: HashSet<String>,
    pub launch_on_login: bool,
    pub log_to_file: bool,
    pub log_file_path: String,
    pub browser_monitored: bool,
    pub domain_preference: DomainPreference,
    pub filter_type: FilterType,
    pub denylist: String,
    pub allowlist: String,
    pub app_version: String,
    pub installed_apps: Vec<String>,
}

impl Default for HostState {
    fn default() -> Self {
        Self {
            settings: HashMap::new(),
            monitored: HashSet::new(),
            launch_on_login: false,
            log_to_file: false,
            log_file_path: default_log_file_path().display().to_string(),
            browser_monitored: false,
            domain_preference: DomainPreference::default(),
            filter_type: FilterType::default(),
            denylist: String::new(),
            allowlist: String::new(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            installed_apps: Vec::new(),
        }
    }
}

fn default_log_file_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("tempo")
        .join("tempo.log")
}

fn arg_str(args: &[Value], index: usize, channel: Channel) -> Result<String, String> {
    args.get(index)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| format!("{channel}: missing string argument {index}"))
}

fn arg_bool(args: &[Value], index: usize, channel: Channel) -> Result<bool, String> {
    args.get(index)
        .and_then(Value::as_bool)
        .ok_or_else(|| format!("{channel}: missing boolean argument {index}"))
}

/// Wire every channel in the catalog to a handler over `state`.
pub fn register_handlers(endpoint: &mut HostEndpoint, state: Arc<Mutex<HostState>>) {
    let lock_err = |e: &str| format!("host state poisoned: {e}");

    macro_rules! with_state {
        ($channel:expr, |$st:ident, $args:ident| $body:expr) => {{
            let shared = Arc::clone(&state);
            endpoint.handle($channel, move |$args| {
                let mut guard = shared.lock().map_err(|e| lock_err(&e.to_string()))?;
                let $st = &mut *guard;
                $body
            });
        }};
    }

    with_state!(Channel::GetSetting, |st, args| {
        let section = arg_str(args, 0, Channel::GetSetting)?;
        let key = arg_str(args, 1, Channel::GetSetting)?;
        match st.settings.get(&(section, key)) {
            Some(value) => Ok(json!(value)),
            None => Ok(Value::Null),
        }
    });

    with_state!(Channel::SetSetting, |st, args| {
        let section = arg_str(args, 0, Channel::SetSetting)?;
        let key = arg_str(args, 1, Channel::SetSetting)?;
        let value = arg_str(args, 2, Channel::SetSetting)?;
        st.settings.insert((section, key), value);
        Ok(Value::Null)
    });

    with_state!(Channel::IsMonitored, |st, args| {
        let path = arg_str(args, 0, Channel::IsMonitored)?;
        Ok(json!(st.monitored.contains(&path)))
    });

    with_state!(Channel::SetMonitored, |st, args| {
        let path = arg_str(args, 0, Channel::SetMonitored)?;
        if arg_bool(args, 1, Channel::SetMonitored)? {
            st.monitored.insert(path);
        } else {
            st.monitored.remove(&path);
        }
        Ok(Value::Null)
    });

    with_state!(Channel::GetApps, |st, _args| Ok(json!(st.installed_apps)));

    with_state!(Channel::GetAppVersion, |st, _args| Ok(json!(st.app_version)));

    with_state!(Channel::ShouldLaunchOnLogin, |st, _args| Ok(json!(
        st.launch_on_login
    )));

    with_state!(Channel::SetShouldLaunchOnLogin, |st, args| {
        st.launch_on_login = arg_bool(args, 0, Channel::SetShouldLaunchOnLogin)?;
        Ok(Value::Null)
    });

    with_state!(Channel::ShouldLogToFile, |st, _args| Ok(json!(
        st.log_to_file
    )));

    with_state!(Channel::SetShouldLogToFile, |st, args| {
        st.log_to_file = arg_bool(args, 0, Channel::SetShouldLogToFile)?;
        Ok(Value::Null)
    });

    with_state!(Channel::LogFilePath, |st, _args| Ok(json!(
        st.log_file_path
    )));

    with_state!(Channel::IsBrowserMonitored, |st, _args| Ok(json!(
        st.browser_monitored
    )));

    with_state!(Channel::GetDomainPreference, |st, _args| Ok(json!(
        st.domain_preference.as_str()
    )));

    with_state!(Channel::SetDomainPreference, |st, args| {
        let raw = args
            .first()
            .cloned()
            .ok_or_else(|| format!("{}: missing argument", Channel::SetDomainPreference))?;
        st.domain_preference = serde_json::from_value::<DomainPreference>(raw)
            .map_err(|e| format!("{}: {e}", Channel::SetDomainPreference))?;
        Ok(Value::Null)
    });

    with_state!(Channel::GetFilterType, |st, _args| Ok(json!(
        st.filter_type.as_str()
    )));

    with_state!(Channel::SetFilterType, |st, args| {
        let raw = args
            .first()
            .cloned()
            .ok_or_else(|| format!("{}: missing argument", Channel::SetFilterType))?;
        st.filter_type = serde_json::from_value::<FilterType>(raw)
            .map_err(|e| format!("{}: {e}", Channel::SetFilterType))?;
        Ok(Value::Null)
    });

    with_state!(Channel::GetDenylist, |st, _args| Ok(json!(st.denylist)));

    with_state!(Channel::SetDenylist, |st, args| {
        st.denylist = arg_str(args, 0, Channel::SetDenylist)?;
        Ok(Value::Null)
    });

    with_state!(Channel::GetAllowlist, |st, _args| Ok(json!(st.allowlist)));

    with_state!(Channel::SetAllowlist, |st, args| {
        st.allowlist = arg_str(args, 0, Channel::SetAllowlist)?;
        Ok(Value::Null)
    });
}
