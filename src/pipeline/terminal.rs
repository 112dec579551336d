//! Terminal state signals.
//!
//! Reactive signals for the terminal dimensions. A size change triggers a
//! relayout of the landing page.

use spark_signals::signal;
use std::cell::RefCell;

// =============================================================================
// Terminal Size Signals
// =============================================================================

thread_local! {
    static TERMINAL_WIDTH: RefCell<spark_signals::Signal<u16>> = RefCell::new(signal(80));
    static TERMINAL_HEIGHT: RefCell<spark_signals::Signal<u16>> = RefCell::new(signal(24));
}

pub fn terminal_width() -> u16 {
    TERMINAL_WIDTH.with(|w| w.borrow().get())
}

pub fn terminal_height() -> u16 {
    TERMINAL_HEIGHT.with(|h| h.borrow().get())
}

/// Current size as (width, height).
pub fn terminal_size() -> (u16, u16) {
    (terminal_width(), terminal_height())
}

/// Set the terminal size (called on resize events).
///
/// Returns true if the size changed.
pub fn set_terminal_size(width: u16, height: u16) -> bool {
    if terminal_size() == (width, height) {
        return false;
    }
    TERMINAL_WIDTH.with(|w| w.borrow().set(width));
    TERMINAL_HEIGHT.with(|h| h.borrow().set(height));
    true
}

// =============================================================================
// Terminal Detection
// =============================================================================

/// Detect and set the actual terminal size from the environment.
pub fn detect_terminal_size() {
    if let Ok((width, height)) = crossterm::terminal::size() {
        set_terminal_size(width, height);
    }
}

// =============================================================================
// Tests
// =============================================================================
