//! Tests for the bridge surface: wrapper channel/argument encoding,
//! bounded sync reads, and the pass-through primitives.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use serde_json::{Value, json};

use tempo::bridge::{Bridge, Channel, pair};
use tempo::host::{HostState, register_handlers};
use tempo::prefs::{DomainPreference, FilterType};

fn seeded_bridge(state: HostState) -> (Arc<Bridge>, Arc<Mutex<HostState>>) {
    let shared = Arc::new(Mutex::new(state));
    let (transport, mut endpoint) = pair();
    register_handlers(&mut endpoint, Arc::clone(&shared));
    endpoint.spawn();
    (Arc::new(Bridge::new(Arc::new(transport))), shared)
}

#[test]
fn test_get_setting_encodes_section_key_and_internal_flag() {
    let (transport, mut endpoint) = pair();
    let seen = Arc::new(Mutex::new(Vec::<Vec<Value>>::new()));
    let log = Arc::clone(&seen);
    endpoint.handle(Channel::GetSetting, move |args| {
        log.lock().unwrap().push(args.to_vec());
        Ok(json!("secret"))
    });
    endpoint.spawn();
    let bridge = Bridge::new(Arc::new(transport));

    assert_eq!(bridge.get_setting("settings", "api_key", false), "secret");
    assert_eq!(bridge.get_setting("internal", "last_sync", true), "secret");

    let calls = seen.lock().unwrap();
    assert_eq!(
        *calls,
        vec![
            vec![json!("settings"), json!("api_key"), json!(false)],
            vec![json!("internal"), json!("last_sync"), json!(true)],
        ]
    );
}

#[test]
fn test_setting_write_then_read_round_trips() {
    let (bridge, _state) = seeded_bridge(HostState::default());

    bridge.set_setting("settings", "api_key", "waka-123", false);
    assert_eq!(bridge.get_setting("settings", "api_key", false), "waka-123");
}

#[test]
fn test_monitored_path_flag_round_trips() {
    let (bridge, _state) = seeded_bridge(HostState::default());

    assert!(!bridge.is_monitored("/Applications/Firefox.app"));
    bridge.set_monitored("/Applications/Firefox.app", true);
    assert!(bridge.is_monitored("/Applications/Firefox.app"));
    bridge.set_monitored("/Applications/Firefox.app", false);
    assert!(!bridge.is_monitored("/Applications/Firefox.app"));
}

#[test]
fn test_list_texts_round_trip() {
    let (bridge, _state) = seeded_bridge(HostState::default());

    bridge.set_denylist("a.example\nb.example\n");
    assert_eq!(bridge.denylist(), "a.example\nb.example\n");
    bridge.set_allowlist("c.example\n");
    assert_eq!(bridge.allowlist(), "c.example\n");
}

#[test]
fn test_enum_wrappers_round_trip_wire_names() {
    let (bridge, state) = seeded_bridge(HostState::default());

    bridge.set_domain_preference(DomainPreference::Url);
    assert_eq!(bridge.domain_preference(), DomainPreference::Url);
    bridge.set_filter_type(FilterType::Allowlist);
    assert_eq!(bridge.filter_type(), FilterType::Allowlist);

    let host = state.lock().unwrap();
    assert_eq!(host.domain_preference, DomainPreference::Url);
    assert_eq!(host.filter_type, FilterType::Allowlist);
}

#[test]
fn test_installed_apps_and_version_reads() {
    let mut seed = HostState::default();
    seed.installed_apps = vec!["Firefox".to_string(), "Code".to_string()];
    seed.app_version = "3.0.1".to_string();
    let (bridge, _state) = seeded_bridge(seed);

    assert_eq!(
        bridge.installed_apps(),
        vec!["Firefox".to_string(), "Code".to_string()]
    );
    assert_eq!(bridge.app_version(), "3.0.1");
}

#[test]
fn test_sync_read_is_bounded_and_falls_back() {
    let (transport, mut endpoint) = pair();
    endpoint.handle(Channel::ShouldLogToFile, |_| {
        // Hung privileged peer.
        std::thread::sleep(Duration::from_secs(2));
        Ok(json!(true))
    });
    endpoint.spawn();
    let bridge = Bridge::new(Arc::new(transport));

    let started = Instant::now();
    assert!(!bridge.should_log_to_file());
    assert!(
        started.elapsed() < Duration::from_secs(1),
        "sync read did not respect its timeout"
    );
}

#[test]
fn test_malformed_reply_shape_falls_back() {
    let (transport, mut endpoint) = pair();
    endpoint.handle(Channel::ShouldLaunchOnLogin, |_| Ok(json!("yes")));
    endpoint.handle(Channel::GetApps, |_| Ok(json!(42)));
    endpoint.spawn();
    let bridge = Bridge::new(Arc::new(transport));

    assert!(!bridge.should_launch_on_login());
    assert!(bridge.installed_apps().is_empty());
}
