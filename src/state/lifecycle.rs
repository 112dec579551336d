//! Screen lifecycle - the "ready" signal and delayed starts.
//!
//! The ready signal is the root of the intro timeline. Effects that must
//! wait for the loading overlay hold a [`StartGate`] instead of counting
//! their own magic delays.
//!
//! # Example
//!
//! ```ignore
//! use spark_landing::state::lifecycle::{mark_ready, ready_signal, start_after};
//!
//! let mut gate = start_after(ready_signal(), Duration::from_millis(3000));
//! mark_ready();
//!
//! // in the loop
//! if gate.poll(clock.now()) {
//!     // start the typewriter
//! }
//! ```

use std::cell::RefCell;
use std::time::Duration;

use log::info;
use spark_signals::{signal, Signal};

// =============================================================================
// READY SIGNAL
// =============================================================================

thread_local! {
    static SCREEN_READY: RefCell<Signal<bool>> = RefCell::new(signal(false));
}

/// Flag the screen as ready. Idempotent.
pub fn mark_ready() {
    SCREEN_READY.with(|ready| {
        let ready = ready.borrow();
        if !ready.get() {
            info!("lifecycle: screen ready");
            ready.set(true);
        }
    });
}

pub fn is_ready() -> bool {
    SCREEN_READY.with(|ready| ready.borrow().get())
}

/// The ready signal, for gates and reactive readers.
pub fn ready_signal() -> Signal<bool> {
    SCREEN_READY.with(|ready| ready.borrow().clone())
}

/// Replace the ready signal with a fresh `false` one (for testing).
pub fn reset_lifecycle() {
    SCREEN_READY.with(|ready| *ready.borrow_mut() = signal(false));
}

// =============================================================================
// START GATE
// =============================================================================

/// Opens once, `delay` after `signal` was first seen true.
pub struct StartGate {
    signal: Signal<bool>,
    delay: Duration,
    ready_since: Option<Duration>,
    opened: bool,
}

/// Build a gate that opens `delay` after `signal` turns true.
pub fn start_after(signal: Signal<bool>, delay: Duration) -> StartGate {
    StartGate {
        signal,
        delay,
        ready_since: None,
        opened: false,
    }
}

impl StartGate {
    /// Returns true exactly once: on the first poll at or after the open time.
    pub fn poll(&mut self, now: Duration) -> bool {
        if self.opened {
            return false;
        }
        if self.ready_since.is_none() && self.signal.get() {
            self.ready_since = Some(now);
        }
        match self.ready_since {
            Some(since) if now >= since + self.delay => {
                self.opened = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.opened
    }

    /// When the signal was first observed true.
    pub fn ready_since(&self) -> Option<Duration> {
        self.ready_since
    }

    /// Time until the gate opens. `None` while the signal is still false.
    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        if self.opened {
            return Some(Duration::ZERO);
        }
        self.ready_since
            .map(|since| (since + self.delay).saturating_sub(now))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

// =============================================================================
// TESTS
// =============================================================================
