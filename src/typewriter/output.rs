//! Output targets - where the typewriter writes its displayed prefix.
//!
//! A target receives the full prefix on every tick and replaces whatever it
//! held before. Nothing is appended.

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::{signal, Signal};

/// Designated text output of a typewriter.
pub trait TextTarget {
    /// Overwrite the target's content with `text`.
    fn write_text(&mut self, text: &str);
}

impl<T: TextTarget + ?Sized> TextTarget for Box<T> {
    fn write_text(&mut self, text: &str) {
        (**self).write_text(text)
    }
}

// =============================================================================
// SIGNAL TARGET
// =============================================================================

/// Writes into a reactive `Signal<String>`.
///
/// The render pipeline reads the same signal when composing a frame.
#[derive(Clone)]
pub struct SignalTarget {
    text: Signal<String>,
}

impl SignalTarget {
    /// Create a target backed by a fresh empty signal.
    pub fn new() -> Self {
        Self {
            text: signal(String::new()),
        }
    }

    /// Wrap an existing signal.
    pub fn from_signal(text: Signal<String>) -> Self {
        Self { text }
    }

    /// The underlying signal, for readers.
    pub fn signal(&self) -> Signal<String> {
        self.text.clone()
    }

    /// Current content.
    pub fn text(&self) -> String {
        self.text.get()
    }
}

impl Default for SignalTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl TextTarget for SignalTarget {
    fn write_text(&mut self, text: &str) {
        if self.text.get() != text {
            self.text.set(text.to_string());
        }
    }
}

// =============================================================================
// RECORDING TARGET
// =============================================================================

/// Keeps every write. Clones share the same history.
///
/// Handy for headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    history: Rc<RefCell<Vec<String>>>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last written text, or empty if nothing was written yet.
    pub fn current(&self) -> String {
        self.history.borrow().last().cloned().unwrap_or_default()
    }

    /// Every write in order.
    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }

    pub fn writes(&self) -> usize {
        self.history.borrow().len()
    }
}

impl TextTarget for RecordingTarget {
    fn write_text(&mut self, text: &str) {
        self.history.borrow_mut().push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_target_overwrites() {
        let mut target = SignalTarget::new();
        target.write_text("Ru");
        target.write_text("Rus");
        assert_eq!(target.text(), "Rus");
        assert_eq!(target.signal().get(), "Rus");
    }

    #[test]
    fn test_recording_target_shares_history() {
        let recorder = RecordingTarget::new();
        let mut writer = recorder.clone();
        writer.write_text("a");
        writer.write_text("");
        assert_eq!(recorder.history(), vec!["a".to_string(), String::new()]);
        assert_eq!(recorder.current(), "");
        assert_eq!(recorder.writes(), 2);
    }
}
