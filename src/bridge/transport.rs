//! Transport seam between the bridge and the privileged process.
//!
//! The bridge never talks to the host directly; it goes through this trait
//! so that tests can substitute a recording or failing transport, and so
//! the in-process pair in [`pair`](super::pair) stays swappable for a real
//! process boundary later.

use std::time::Duration;

use serde_json::Value;

use super::channel::Channel;

/// Upper bound on a blocking read. A hung privileged peer degrades to a
/// logged warning and a fallback value instead of freezing the UI thread.
pub const SYNC_REQUEST_TIMEOUT: Duration = Duration::from_millis(500);

/// Upper bound on an asynchronous `invoke` round trip.
pub const INVOKE_TIMEOUT: Duration = Duration::from_secs(5);

/// Transport-level failure taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The peer did not answer within the allowed window.
    #[error("no response on '{0}' within {1:?}")]
    Timeout(Channel, Duration),

    /// The peer is gone (dispatch loop exited or channel dropped).
    #[error("transport closed")]
    Closed,

    /// The peer answered with an error. Formats as the bare message so the
    /// UI can show exactly what the host reported.
    #[error("{message}")]
    Host { channel: Channel, message: String },
}

/// One inbound push message from the privileged side.
#[derive(Debug)]
pub struct Event {
    pub channel: Channel,
    pub args: Vec<Value>,
}

/// Message passing primitive the bridge is built on.
pub trait Transport: Send + Sync {
    /// Fire-and-forget message. FIFO relative to other calls on the same
    /// transport; no delivery acknowledgment.
    fn send(&self, channel: Channel, args: Vec<Value>);

    /// Blocking request/response, bounded by `timeout`.
    fn request(
        &self,
        channel: Channel,
        args: Vec<Value>,
        timeout: Duration,
    ) -> Result<Value, TransportError>;

    /// Non-blocking poll for the next pushed event, if any.
    fn try_recv_event(&self) -> Option<Event>;
}
