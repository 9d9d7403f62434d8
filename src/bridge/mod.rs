//! The sanctioned API surface between the UI context and the privileged
//! host process.
//!
//! The UI never sees the raw transport. It goes through [`Bridge`], whose
//! surface is enumerable and closed: the generic primitives (`on`, `off`,
//! `send`, `send_sync`, `invoke`) mirror the transport's shape but only
//! accept a [`Channel`] from the fixed catalog, and each convenience
//! wrapper encodes exactly one channel with a fixed argument order.
//!
//! Reads are blocking but bounded: a sync read that misses its window
//! returns the field's fallback value and logs a warning instead of
//! freezing the UI. Writes are fire-and-forget.

pub mod channel;
pub mod pair;
pub mod transport;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use tracing::warn;

use crate::prefs::{DomainPreference, FilterType};

pub use channel::Channel;
pub use pair::{HostEndpoint, HostPusher, UiTransport, pair};
pub use transport::{Event, INVOKE_TIMEOUT, SYNC_REQUEST_TIMEOUT, Transport, TransportError};

/// Handle for unregistering a listener, returned by [`Bridge::on`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

struct Listener {
    id: ListenerId,
    channel: Channel,
    callback: Box<dyn Fn(&[Value]) + Send>,
}

/// Pending result of a [`Bridge::invoke`] call, polled from the UI loop.
///
/// Dropping the handle abandons the reply; the worker's send fails silently
/// and nothing is written after disposal.
pub struct PendingReply {
    rx: Receiver<Result<Value, TransportError>>,
}

impl PendingReply {
    /// Take the reply if it has arrived. Returns `None` while in flight.
    pub fn try_take(&self) -> Option<Result<Value, TransportError>> {
        self.rx.try_recv().ok()
    }
}

/// The bridge proper. Shared behind an `Arc` by everything in the UI
/// context.
pub struct Bridge {
    transport: Arc<dyn Transport>,
    listeners: Mutex<Vec<Listener>>,
    next_listener: AtomicU64,
}

impl Bridge {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            listeners: Mutex::new(Vec::new()),
            next_listener: AtomicU64::new(0),
        }
    }

    // ── Generic primitives ─────────────────────────────────────────────

    /// Register `callback` for every inbound event on `channel`. The
    /// subscription persists until [`off`](Self::off) is called with the
    /// returned handle.
    pub fn on(&self, channel: Channel, callback: impl Fn(&[Value]) + Send + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener.fetch_add(1, Ordering::Relaxed));
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push(Listener {
                id,
                channel,
                callback: Box::new(callback),
            });
        }
        id
    }

    /// Remove a previously registered listener. No-op if already removed.
    pub fn off(&self, id: ListenerId) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.retain(|l| l.id != id);
        }
    }

    /// Fire-and-forget message. FIFO relative to other sends on this
    /// bridge; no delivery acknowledgment.
    pub fn send(&self, channel: Channel, args: Vec<Value>) {
        self.transport.send(channel, args);
    }

    /// Blocking request, bounded by [`SYNC_REQUEST_TIMEOUT`]. Intended for
    /// fast local queries only; it stalls the calling thread while waiting.
    pub fn send_sync(&self, channel: Channel, args: Vec<Value>) -> Result<Value, TransportError> {
        self.transport.request(channel, args, SYNC_REQUEST_TIMEOUT)
    }

    /// Asynchronous request/response. The round trip runs on a worker
    /// thread; poll the returned handle from the UI loop.
    pub fn invoke(&self, channel: Channel, args: Vec<Value>) -> PendingReply {
        let (tx, rx) = mpsc::channel();
        let transport = Arc::clone(&self.transport);
        std::thread::spawn(move || {
            let result = transport.request(channel, args, INVOKE_TIMEOUT);
            // Caller may have dropped the handle already.
            let _ = tx.send(result);
        });
        PendingReply { rx }
    }

    /// Drain pushed events from the transport and dispatch them to the
    /// registered listeners. Called once per UI frame.
    pub fn pump_events(&self) {
        while let Some(event) = self.transport.try_recv_event() {
            if let Ok(listeners) = self.listeners.lock() {
                for listener in listeners.iter().filter(|l| l.channel == event.channel) {
                    (listener.callback)(&event.args);
                }
            }
        }
    }

    // ── Convenience wrappers ───────────────────────────────────────────
    //
    // One fixed channel and argument order each; no validation here.
    // Validation, if any, is the store's responsibility.

    /// Read a stored string value. Absent or unreachable resolves to "".
    pub fn get_setting(&self, section: &str, key: &str, internal: bool) -> String {
        self.read_string(
            Channel::GetSetting,
            vec![json!(section), json!(key), json!(internal)],
        )
    }

    /// Write a stored string value. No confirmation is returned.
    pub fn set_setting(&self, section: &str, key: &str, value: &str, internal: bool) {
        self.send(
            Channel::SetSetting,
            vec![json!(section), json!(key), json!(value), json!(internal)],
        );
    }

    pub fn is_monitored(&self, path: &str) -> bool {
        self.read_bool(Channel::IsMonitored, vec![json!(path)])
    }

    pub fn set_monitored(&self, path: &str, monitor: bool) {
        self.send(Channel::SetMonitored, vec![json!(path), json!(monitor)]);
    }

    /// List of installed applications, opaque to this layer.
    pub fn installed_apps(&self) -> Vec<String> {
        match self.send_sync(Channel::GetApps, vec![]) {
            Ok(Value::Array(items)) => items
                .into_iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            Ok(other) => {
                warn!(channel = %Channel::GetApps, ?other, "unexpected reply shape");
                Vec::new()
            }
            Err(e) => {
                warn!(channel = %Channel::GetApps, error = %e, "sync read failed");
                Vec::new()
            }
        }
    }

    pub fn app_version(&self) -> String {
        self.read_string(Channel::GetAppVersion, vec![])
    }

    pub fn should_launch_on_login(&self) -> bool {
        self.read_bool(Channel::ShouldLaunchOnLogin, vec![])
    }

    pub fn set_should_launch_on_login(&self, flag: bool) {
        self.send(Channel::SetShouldLaunchOnLogin, vec![json!(flag)]);
    }

    pub fn should_log_to_file(&self) -> bool {
        self.read_bool(Channel::ShouldLogToFile, vec![])
    }

    pub fn set_should_log_to_file(&self, flag: bool) {
        self.send(Channel::SetShouldLogToFile, vec![json!(flag)]);
    }

    pub fn log_file_path(&self) -> String {
        self.read_string(Channel::LogFilePath, vec![])
    }

    pub fn is_browser_monitored(&self) -> bool {
        self.read_bool(Channel::IsBrowserMonitored, vec![])
    }

    pub fn domain_preference(&self) -> DomainPreference {
        let raw = self.read_string(Channel::GetDomainPreference, vec![]);
        DomainPreference::from_wire(&raw).unwrap_or_default()
    }

    pub fn set_domain_preference(&self, pref: DomainPreference) {
        self.send(Channel::SetDomainPreference, vec![json!(pref.as_str())]);
    }

    pub fn filter_type(&self) -> FilterType {
        let raw = self.read_string(Channel::GetFilterType, vec![]);
        FilterType::from_wire(&raw).unwrap_or_default()
    }

    pub fn set_filter_type(&self, filter: FilterType) {
        self.send(Channel::SetFilterType, vec![json!(filter.as_str())]);
    }

    pub fn denylist(&self) -> String {
        self.read_string(Channel::GetDenylist, vec![])
    }

    pub fn set_denylist(&self, text: &str) {
        self.send(Channel::SetDenylist, vec![json!(text)]);
    }

    pub fn allowlist(&self) -> String {
        self.read_string(Channel::GetAllowlist, vec![])
    }

    pub fn set_allowlist(&self, text: &str) {
        self.send(Channel::SetAllowlist, vec![json!(text)]);
    }

    // ── Fallback plumbing ──────────────────────────────────────────────

    fn read_string(&self, channel: Channel, args: Vec<Value>) -> String {
        match self.send_sync(channel, args) {
            Ok(Value::String(s)) => s,
            Ok(Value::Null) => String::new(),
            Ok(other) => {
                warn!(%channel, ?other, "unexpected reply shape");
                String::new()
            }
            Err(e) => {
                warn!(%channel, error = %e, "sync read failed, using default");
                String::new()
            }
        }
    }

    fn read_bool(&self, channel: Channel, args: Vec<Value>) -> bool {
        match self.send_sync(channel, args) {
            Ok(Value::Bool(b)) => b,
            Ok(other) => {
                warn!(%channel, ?other, "unexpected reply shape");
                false
            }
            Err(e) => {
                warn!(%channel, error = %e, "sync read failed, using default");
                false
            }
        }
    }
}
