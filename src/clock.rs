//! Cancellable timers on virtual time.
//!
//! A `Timer` never reads the wall clock; the owner feeds it elapsed
//! durations.  That keeps the controller deterministic under test and
//! lets the terminal loop drive it with real `Instant` deltas.

use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timer {
    period: Duration,
    /// Time left until the timer fires, `None` while disarmed.
    remaining: Option<Duration>,
}

impl Timer {
    pub fn new(period: Duration) -> Self {
        Timer {
            period,
            remaining: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start a full period from now, discarding any partial progress.
    pub fn arm(&mut self) {
        self.remaining = Some(self.period);
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    pub fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }

    pub fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    /// Move the timer forward by `dt`.  Returns `true` if it fired, in
    /// which case it is left disarmed; callers re-arm repeating timers.
    pub fn advance(&mut self, dt: Duration) -> bool {
        match self.remaining {
            Some(left) if dt >= left => {
                self.remaining = None;
                true
            }
            Some(left) => {
                self.remaining = Some(left - dt);
                false
            }
            None => false,
        }
    }
}

/// The earliest deadline among `timers`, if any is armed.
pub fn next_deadline(timers: &[&Timer]) -> Option<Duration> {
    timers.iter().filter_map(|t| t.remaining()).min()
}
