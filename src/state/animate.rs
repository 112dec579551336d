//! Blink Animation - shared clock-driven phases per FPS
//!
//! Drives the caret that trails the typewriter text. All blinkers at the
//! same FPS share one registry entry, so carets on screen toggle together.
//!
//! There is no timer thread: the phase is a pure function of the loop
//! clock and the moment the first subscriber arrived. The loop asks
//! [`next_blink_toggle`] how long it may sleep before the caret flips.
//!
//! # Example
//!
//! ```ignore
//! use spark_landing::state::animate::{subscribe_to_blink, blink_phase};
//!
//! let unsubscribe = subscribe_to_blink(2, clock.now());
//! let visible = blink_phase(2, clock.now());
//! unsubscribe();
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

// =============================================================================
// BLINK REGISTRY
// =============================================================================

/// Per-FPS blink state.
struct BlinkRegistry {
    /// Clock time when the first subscriber arrived.
    origin: Duration,
    subscribers: usize,
}

thread_local! {
    static BLINK_REGISTRIES: RefCell<HashMap<u8, BlinkRegistry>> = RefCell::new(HashMap::new());
}

/// Half of one on/off cycle. 2 FPS toggles every 250ms.
fn toggle_interval(fps: u8) -> Duration {
    Duration::from_millis(1000 / fps as u64 / 2)
}

fn phase_at(origin: Duration, fps: u8, now: Duration) -> bool {
    let step = toggle_interval(fps).as_millis().max(1);
    let elapsed = now.saturating_sub(origin).as_millis();
    (elapsed / step) % 2 == 0
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Subscribe to blinking at `fps`, starting visible at `now`.
///
/// Returns the unsubscribe function. `fps == 0` disables blinking and
/// returns a no-op.
pub fn subscribe_to_blink(fps: u8, now: Duration) -> Box<dyn FnOnce()> {
    if fps == 0 {
        return Box::new(|| {});
    }

    BLINK_REGISTRIES.with(|registries| {
        let mut registries = registries.borrow_mut();
        let registry = registries.entry(fps).or_insert_with(|| BlinkRegistry {
            origin: now,
            subscribers: 0,
        });

        // Restart the cycle when the first subscriber (re)joins
        if registry.subscribers == 0 {
            registry.origin = now;
        }
        registry.subscribers += 1;
    });

    Box::new(move || {
        BLINK_REGISTRIES.with(|registries| {
            let mut registries = registries.borrow_mut();
            if let Some(registry) = registries.get_mut(&fps) {
                registry.subscribers = registry.subscribers.saturating_sub(1);
            }
        });
    })
}

/// Blink phase at `now`: true = visible.
///
/// Always visible when nobody subscribed at this FPS.
pub fn blink_phase(fps: u8, now: Duration) -> bool {
    BLINK_REGISTRIES.with(|registries| {
        registries
            .borrow()
            .get(&fps)
            .filter(|r| r.subscribers > 0)
            .map(|r| phase_at(r.origin, fps, now))
            .unwrap_or(true)
    })
}

/// Time from `now` until the phase at `fps` next flips.
///
/// `None` when nobody subscribed at this FPS.
pub fn next_blink_toggle(fps: u8, now: Duration) -> Option<Duration> {
    BLINK_REGISTRIES.with(|registries| {
        let registries = registries.borrow();
        let registry = registries.get(&fps).filter(|r| r.subscribers > 0)?;
        let step = toggle_interval(fps).as_millis().max(1);
        let elapsed = now.saturating_sub(registry.origin).as_millis();
        Some(Duration::from_millis((step - elapsed % step) as u64))
    })
}

pub fn subscriber_count(fps: u8) -> usize {
    BLINK_REGISTRIES.with(|registries| {
        registries
            .borrow()
            .get(&fps)
            .map(|r| r.subscribers)
            .unwrap_or(0)
    })
}

/// Clear all registries (for testing).
pub fn reset_blink_registries() {
    BLINK_REGISTRIES.with(|registries| registries.borrow_mut().clear());
}

// =============================================================================
// TESTS
// =============================================================================
