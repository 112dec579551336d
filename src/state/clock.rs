//! Clock and timer slot.
//!
//! Time is a [`Duration`] since the clock's origin. The real loop uses
//! [`SystemClock`]; tests step a [`ManualClock`] by hand.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

// =============================================================================
// CLOCKS
// =============================================================================

/// Monotonic time source.
pub trait Clock {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;
}

/// Wall clock anchored at construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    pub fn set(&self, at: Duration) {
        self.now.set(at);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

// =============================================================================
// TIMER SLOT
// =============================================================================

/// One self-rescheduling timer.
///
/// The callback runs at most once per [`TimerSlot::fire`] and is re-armed
/// relative to the time it ran, so a stalled loop never replays missed
/// ticks in a burst.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerSlot {
    due: Option<Duration>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm to fire `delay` after `now`.
    pub fn arm(&mut self, now: Duration, delay: Duration) {
        self.due = Some(now + delay);
    }

    pub fn disarm(&mut self) {
        self.due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.due.is_some()
    }

    pub fn due(&self) -> Option<Duration> {
        self.due
    }

    pub fn is_due(&self, now: Duration) -> bool {
        self.due.is_some_and(|due| now >= due)
    }

    /// Time left before firing. `None` when disarmed.
    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        self.due.map(|due| due.saturating_sub(now))
    }

    /// Run `callback` if due and re-arm with the delay it returns.
    ///
    /// Returns true if the callback ran.
    pub fn fire(&mut self, now: Duration, callback: impl FnOnce() -> Duration) -> bool {
        if !self.is_due(now) {
            return false;
        }
        let delay = callback();
        self.arm(now, delay);
        true
    }
}
