//! Per-frame coalescing of scroll notifications.
//!
//! Scroll input can arrive far faster than the terminal repaints. Rather
//! than recomputing the active section per keystroke, notifications land in
//! a pending slot where the newest position overwrites older ones, and the
//! slot is drained at most once per frame budget. The schedule is driven by
//! explicit `Instant`s passed in by the caller, so tests can walk a fake
//! clock through frame boundaries without sleeping.

use std::time::{Duration, Instant};

/// Frame budget for a 60Hz refresh.
pub const FRAME_BUDGET: Duration = Duration::from_millis(16);

/// Pending-notification slot plus the timestamp of the last firing.
pub struct Coalescer {
    budget: Duration,
    pending: Option<usize>,
    last_fired: Option<Instant>,
}

impl Coalescer {
    #[must_use]
    /// Creates a coalescer that fires at most once per `budget`.
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            pending: None,
            last_fired: None,
        }
    }

    /// Records a scroll notification. A later position always supersedes
    /// an earlier one that has not fired yet.
    pub fn notify(&mut self, scroll: usize) {
        self.pending = Some(scroll);
    }

    #[must_use]
    /// Whether a notification is waiting for the next frame boundary.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    /// The queued position, without draining it or consuming the frame.
    pub fn pending(&self) -> Option<usize> {
        self.pending
    }

    /// Drains the pending position if a frame boundary has been reached.
    ///
    /// Returns `None` when nothing is pending or the budget since the last
    /// firing has not yet elapsed. At most one position is returned per
    /// budget window regardless of how many notifications arrived.
    pub fn poll(&mut self, now: Instant) -> Option<usize> {
        self.pending?;

        if let Some(last) = self.last_fired {
            if now.duration_since(last) < self.budget {
                return None;
            }
        }

        self.last_fired = Some(now);
        self.pending.take()
    }

    #[must_use]
    /// Time remaining until the pending notification may fire.
    ///
    /// `None` when nothing is pending (the caller can block on input
    /// indefinitely); zero when the notification is already due.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending?;

        let remaining = self.last_fired.map_or(Duration::ZERO, |last| {
            self.budget.saturating_sub(now.duration_since(last))
        });
        Some(remaining)
    }
}

impl Default for Coalescer {
    fn default() -> Self {
        Self::new(FRAME_BUDGET)
    }
}

#[cfg(test)]
#[path = "tests/frame.rs"]
mod tests;
