//! Per-field write debouncing.
//!
//! Free-text preferences are written through the bridge only after a quiet
//! period with no further edits; each new edit cancels and reschedules the
//! pending write, so rapid typing coalesces into one call carrying the
//! final value. The clock is passed in explicitly, which keeps the type
//! testable without sleeping.

use std::time::{Duration, Instant};

/// Quiet period between the last edit and the external write.
pub const QUIET_PERIOD: Duration = Duration::from_millis(200);

struct PendingWrite {
    value: String,
    deadline: Instant,
}

/// Coalesces rapid edits of one field into a single delayed write.
pub struct Debouncer {
    quiet: Duration,
    pending: Option<PendingWrite>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Record an edit, replacing any pending value and restarting the
    /// quiet-period timer.
    pub fn edit(&mut self, value: String, now: Instant) {
        self.pending = Some(PendingWrite {
            value,
            deadline: now + self.quiet,
        });
    }

    /// Take the pending value if its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref()?.deadline <= now {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// Take the pending value immediately, regardless of the timer.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
