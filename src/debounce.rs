//! Burst coalescing for live previews
//!
//! Each submission cancels whatever was pending and schedules the new value
//! one quiet interval later. Nothing is dropped for good: the latest value is
//! always released once input pauses.

use std::time::{Duration, Instant};

use tracing::trace;

#[derive(Debug)]
struct Pending<T> {
    value: T,
    due: Instant,
}

/// Holds at most one pending value and releases it after a quiet interval
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    pub fn quiet(&self) -> Duration {
        self.quiet
    }

    /// Replace any pending value and restart the quiet interval from `now`.
    /// Returns true when an earlier value was superseded.
    pub fn submit(&mut self, value: T, now: Instant) -> bool {
        let superseded = self.pending.is_some();
        if superseded {
            trace!("debounce: superseding pending value");
        }
        self.pending = Some(Pending {
            value,
            due: now + self.quiet,
        });
        superseded
    }

    /// Take the pending value if its quiet interval has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self.deadline()?;
        if now < due {
            return None;
        }
        self.pending.take().map(|p| p.value)
    }

    /// Take the pending value immediately, ignoring the interval
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Drop the pending value without releasing it
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// When the pending value becomes due, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
