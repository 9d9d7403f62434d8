//! In-process transport pair: the UI half and the privileged host half,
//! connected by std mpsc channels.
//!
//! The host half runs a dispatch loop (usually on a background thread) that
//! answers each request from a table of per-channel handlers. Requests and
//! fire-and-forget messages share one queue, so a request observes every
//! write that was sent before it. Callers rely on this to read their own
//! writes back.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use super::channel::Channel;
use super::transport::{Event, Transport, TransportError};

/// Handler for one channel on the host side. Fire-and-forget senders ignore
/// the returned value; request senders receive it as the reply.
pub type Handler = Box<dyn FnMut(&[Value]) -> Result<Value, String> + Send>;

enum UiMessage {
    Fire {
        channel: Channel,
        args: Vec<Value>,
    },
    Request {
        channel: Channel,
        args: Vec<Value>,
        reply: Sender<Result<Value, String>>,
    },
}

/// UI half of the pair. Cheap to share behind an `Arc` via the
/// [`Transport`] trait object.
pub struct UiTransport {
    tx: Sender<UiMessage>,
    events: Mutex<Receiver<Event>>,
}

impl Transport for UiTransport {
    fn send(&self, channel: Channel, args: Vec<Value>) {
        if self.tx.send(UiMessage::Fire { channel, args }).is_err() {
            debug!(%channel, "send dropped: host endpoint is gone");
        }
    }

    fn request(
        &self,
        channel: Channel,
        args: Vec<Value>,
        timeout: Duration,
    ) -> Result<Value, TransportError> {
        let (reply_tx, reply_rx) = mpsc::channel();
        self.tx
            .send(UiMessage::Request {
                channel,
                args,
                reply: reply_tx,
            })
            .map_err(|_| TransportError::Closed)?;

        match reply_rx.recv_timeout(timeout) {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(message)) => Err(TransportError::Host { channel, message }),
            Err(RecvTimeoutError::Timeout) => Err(TransportError::Timeout(channel, timeout)),
            Err(RecvTimeoutError::Disconnected) => Err(TransportError::Closed),
        }
    }

    fn try_recv_event(&self) -> Option<Event> {
        self.events.lock().ok()?.try_recv().ok()
    }
}

/// Handle for pushing events from the host side to the UI.
#[derive(Clone)]
pub struct HostPusher {
    tx: Sender<Event>,
}

impl HostPusher {
    pub fn push(&self, channel: Channel, args: Vec<Value>) {
        if self.tx.send(Event { channel, args }).is_err() {
            debug!(%channel, "push dropped: ui endpoint is gone");
        }
    }
}

/// Host half of the pair: owns the handler table and the dispatch loop.
pub struct HostEndpoint {
    rx: Receiver<UiMessage>,
    push_tx: Sender<Event>,
    handlers: HashMap<Channel, Handler>,
}

impl HostEndpoint {
    /// Register the handler for `channel`, replacing any previous one.
    pub fn handle(
        &mut self,
        channel: Channel,
        handler: impl FnMut(&[Value]) -> Result<Value, String> + Send + 'static,
    ) {
        self.handlers.insert(channel, Box::new(handler));
    }

    /// Channels that currently have a handler.
    pub fn handled_channels(&self) -> Vec<Channel> {
        self.handlers.keys().copied().collect()
    }

    /// Handle for pushing unsolicited events to the UI.
    pub fn pusher(&self) -> HostPusher {
        HostPusher {
            tx: self.push_tx.clone(),
        }
    }

    /// Dispatch messages until the UI half is dropped.
    pub fn run(mut self) {
        while let Ok(message) = self.rx.recv() {
            match message {
                UiMessage::Fire { channel, args } => match self.handlers.get_mut(&channel) {
                    Some(handler) => {
                        if let Err(e) = handler(&args) {
                            warn!(%channel, error = %e, "handler failed for fire-and-forget message");
                        }
                    }
                    None => warn!(%channel, "dropped message for unhandled channel"),
                },
                UiMessage::Request {
                    channel,
                    args,
                    reply,
                } => {
                    debug!(%channel, "dispatching request");
                    let result = match self.handlers.get_mut(&channel) {
                        Some(handler) => handler(&args),
                        None => Err(format!("no handler registered for '{channel}'")),
                    };
                    // Requester may have timed out and gone away.
                    let _ = reply.send(result);
                }
            }
        }
    }

    /// Run the dispatch loop on a background thread.
    pub fn spawn(self) -> JoinHandle<()> {
        std::thread::spawn(move || self.run())
    }
}

/// Create a connected UI/host pair.
pub fn pair() -> (UiTransport, HostEndpoint) {
    let (ui_tx, host_rx) = mpsc::channel();
    let (push_tx, event_rx) = mpsc::channel();
    (
        UiTransport {
            tx: ui_tx,
            events: Mutex::new(event_rx),
        },
        HostEndpoint {
            rx: host_rx,
            push_tx,
            handlers: HashMap::new(),
        },
    )
}
