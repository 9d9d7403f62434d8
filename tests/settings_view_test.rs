//! End-to-end tests for the settings view, run headlessly against a live
//! host endpoint.
//!
//! These tests verify that:
//! 1. Mounting snapshots every preference from the store
//! 2. Toggles and selections write through immediately and read back
//! 3. Debounced text edits coalesce into one write per quiet window
//! 4. The browser section gating flag is a mount-time snapshot
//! 5. The version footer reports host errors verbatim

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use serde_json::Value;

use tempo::bridge::{Bridge, Channel, pair};
use tempo::gui::{SettingsView, VersionStatus};
use tempo::host::{HostState, register_handlers};
use tempo::prefs::{DomainPreference, FilterType};

/// Spin up a host over `state` and return a bridge connected to it.
fn seeded_bridge(state: HostState) -> (Arc<Bridge>, Arc<Mutex<HostState>>) {
    let shared = Arc::new(Mutex::new(state));
    let (transport, mut endpoint) = pair();
    register_handlers(&mut endpoint, Arc::clone(&shared));
    endpoint.spawn();
    (Arc::new(Bridge::new(Arc::new(transport))), shared)
}

/// Tick the view until the version fetch resolves.
fn wait_for_version(view: &mut SettingsView) -> VersionStatus {
    let deadline = Instant::now() + Duration::from_secs(2);
    loop {
        view.tick(Instant::now());
        match view.version() {
            VersionStatus::Loading => {}
            resolved => return resolved.clone(),
        }
        assert!(Instant::now() < deadline, "version fetch never resolved");
        std::thread::sleep(Duration::from_millis(5));
    }
}

fn browser_state() -> HostState {
    let mut state = HostState::default();
    state.browser_monitored = true;
    state
}

#[test]
fn test_mount_snapshots_store_state() {
    let mut seed = HostState::default();
    seed.settings.insert(
        ("settings".to_string(), "api_key".to_string()),
        "abc123".to_string(),
    );
    seed.log_to_file = false;
    seed.launch_on_login = true;
    seed.browser_monitored = true;
    seed.domain_preference = DomainPreference::Domain;
    seed.filter_type = FilterType::Denylist;
    seed.denylist = "foo.com\n".to_string();
    seed.app_version = "2.1.0".to_string();
    let log_file_path = seed.log_file_path.clone();

    let (bridge, _state) = seeded_bridge(seed);
    let mut view = SettingsView::mount(bridge);

    assert_eq!(view.api_key, "abc123");
    assert!(!view.log_to_file);
    assert!(view.launch_on_login);
    assert!(view.browser_monitored);
    assert_eq!(view.domain_preference, DomainPreference::Domain);
    assert_eq!(view.filter_type, FilterType::Denylist);
    assert_eq!(view.denylist, "foo.com\n");
    assert_eq!(view.allowlist, "");
    assert_eq!(view.log_file_path, log_file_path);

    assert_eq!(wait_for_version(&mut view), VersionStatus::Ready("2.1.0".into()));
}

#[test]
fn test_missing_api_key_reads_as_empty_string() {
    let (bridge, _state) = seeded_bridge(HostState::default());
    let view = SettingsView::mount(bridge);
    assert_eq!(view.api_key, "");
}

#[test]
fn test_toggles_write_through_and_read_back() {
    let (bridge, _state) = seeded_bridge(HostState::default());
    let mut view = SettingsView::mount(Arc::clone(&bridge));

    for flag in [true, false] {
        view.set_log_to_file(flag);
        assert_eq!(view.log_to_file, flag);
        assert_eq!(bridge.should_log_to_file(), flag);

        view.set_launch_on_login(flag);
        assert_eq!(view.launch_on_login, flag);
        assert_eq!(bridge.should_launch_on_login(), flag);
    }
}

#[test]
fn test_selections_write_through_and_read_back() {
    let (bridge, state) = seeded_bridge(browser_state());
    let mut view = SettingsView::mount(Arc::clone(&bridge));

    view.select_domain_preference(DomainPreference::Url);
    assert_eq!(view.domain_preference, DomainPreference::Url);
    assert_eq!(bridge.domain_preference(), DomainPreference::Url);

    view.select_filter_type(FilterType::Allowlist);
    assert_eq!(view.filter_type, FilterType::Allowlist);
    assert_eq!(bridge.filter_type(), FilterType::Allowlist);

    let host = state.lock().unwrap();
    assert_eq!(host.domain_preference, DomainPreference::Url);
    assert_eq!(host.filter_type, FilterType::Allowlist);
}

#[test]
fn test_debounced_edits_coalesce_into_one_write() {
    let shared = Arc::new(Mutex::new(HostState::default()));
    let (transport, mut endpoint) = pair();
    register_handlers(&mut endpoint, Arc::clone(&shared));

    // Replace the store's api-key write handler with one that records
    // every call.
    let writes = Arc::new(Mutex::new(Vec::<String>::new()));
    let log = Arc::clone(&writes);
    endpoint.handle(Channel::SetSetting, move |args| {
        let value = args
            .get(2)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        log.lock().unwrap().push(value);
        Ok(Value::Null)
    });
    endpoint.spawn();

    let bridge = Arc::new(Bridge::new(Arc::new(transport)));
    let mut view = SettingsView::mount(Arc::clone(&bridge));

    let start = Instant::now();
    view.edit_api_key("a".into(), start);
    view.edit_api_key("ab".into(), start + Duration::from_millis(50));
    view.edit_api_key("abc".into(), start + Duration::from_millis(100));
    assert_eq!(view.api_key, "abc");

    // Still inside the quiet period: nothing written yet.
    view.tick(start + Duration::from_millis(150));
    // Quiet period elapsed: exactly one write, carrying the last value.
    view.tick(start + Duration::from_millis(350));
    // A sync read is a barrier: it shares the queue with the writes.
    let _ = bridge.log_file_path();
    assert_eq!(*writes.lock().unwrap(), vec!["abc".to_string()]);

    // An edit after the window fires a second, separate write.
    view.edit_api_key("abcd".into(), start + Duration::from_millis(500));
    view.tick(start + Duration::from_millis(750));
    let _ = bridge.log_file_path();
    assert_eq!(
        *writes.lock().unwrap(),
        vec!["abc".to_string(), "abcd".to_string()]
    );
}

#[test]
fn test_dropping_the_view_flushes_a_pending_debounce() {
    let (bridge, state) = seeded_bridge(browser_state());
    let mut view = SettingsView::mount(Arc::clone(&bridge));

    view.edit_denylist("pending.example\n".into(), Instant::now());
    drop(view);

    let _ = bridge.log_file_path();
    assert_eq!(state.lock().unwrap().denylist, "pending.example\n");
}

#[test]
fn test_browser_flag_is_a_mount_time_snapshot() {
    let (bridge, state) = seeded_bridge(browser_state());
    let view = SettingsView::mount(Arc::clone(&bridge));
    assert!(view.browser_monitored);

    // Monitoring is disabled elsewhere; the mounted view does not notice.
    state.lock().unwrap().browser_monitored = false;
    assert!(view.browser_monitored);

    // A remount picks up the new state.
    drop(view);
    let remounted = SettingsView::mount(bridge);
    assert!(!remounted.browser_monitored);
}

#[test]
fn test_filter_editors_keep_their_text_across_switches() {
    let (bridge, _state) = seeded_bridge(browser_state());
    let mut view = SettingsView::mount(bridge);
    let now = Instant::now();

    view.edit_denylist("deny.example\n".into(), now);
    view.select_filter_type(FilterType::Allowlist);
    view.edit_allowlist("allow.example\n".into(), now);
    view.select_filter_type(FilterType::Denylist);

    assert_eq!(view.denylist, "deny.example\n");
    assert_eq!(view.allowlist, "allow.example\n");
}

#[test]
fn test_version_failure_shows_the_host_message_verbatim() {
    let shared = Arc::new(Mutex::new(HostState::default()));
    let (transport, mut endpoint) = pair();
    register_handlers(&mut endpoint, shared);
    endpoint.handle(Channel::GetAppVersion, |_| {
        Err("network unreachable".to_string())
    });
    endpoint.spawn();

    let bridge = Arc::new(Bridge::new(Arc::new(transport)));
    let mut view = SettingsView::mount(bridge);

    assert_eq!(
        wait_for_version(&mut view),
        VersionStatus::Failed("network unreachable".into())
    );
}
