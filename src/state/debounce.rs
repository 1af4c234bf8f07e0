//! Single-slot debounce timer.
//!
//! The timer never runs on its own: it records a deadline and the caller
//! asks it to fire with the current instant. Arming replaces whatever was
//! pending, so a burst of updates inside the delay window collapses into
//! the last one.

use std::time::{Duration, Instant};

/// A value waiting for its quiet period to elapse.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Cancellable, replace-on-rearm delayed value.
#[derive(Debug, Clone)]
pub struct DebounceTimer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> DebounceTimer<T> {
    /// Create an idle timer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Quiet period between the last `arm` and firing.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value` to fire at `now + delay`, discarding any pending value.
    pub fn arm(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });
    }

    /// Drop the pending value, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Take the pending value if its deadline has been reached.
    ///
    /// Returns `None` when nothing is pending or the deadline is still ahead.
    pub fn fire(&mut self, now: Instant) -> Option<T> {
        let ready = matches!(&self.pending, Some(p) if now >= p.deadline);
        if ready {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// Deadline of the pending value.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Whether a value is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
