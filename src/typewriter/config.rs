//! Typewriter timing.

use std::time::Duration;

use crate::error::{Error, Result};

/// Delays, in milliseconds, returned by each kind of tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TypewriterConfig {
    /// After a character is typed.
    pub typing_delay_ms: u64,
    /// After a character is deleted.
    pub deleting_delay_ms: u64,
    /// After the last character of a word is typed.
    pub end_of_word_dwell_ms: u64,
    /// After the last character is deleted and the next word is selected.
    pub advance_delay_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: 80,
            deleting_delay_ms: 40,
            end_of_word_dwell_ms: 1600,
            advance_delay_ms: 160,
        }
    }
}

impl TypewriterConfig {
    pub fn with_typing_delay_ms(mut self, ms: u64) -> Self {
        self.typing_delay_ms = ms;
        self
    }

    pub fn with_deleting_delay_ms(mut self, ms: u64) -> Self {
        self.deleting_delay_ms = ms;
        self
    }

    pub fn with_end_of_word_dwell_ms(mut self, ms: u64) -> Self {
        self.end_of_word_dwell_ms = ms;
        self
    }

    pub fn with_advance_delay_ms(mut self, ms: u64) -> Self {
        self.advance_delay_ms = ms;
        self
    }

    /// Reject zero delays.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("typing_delay_ms", self.typing_delay_ms),
            ("deleting_delay_ms", self.deleting_delay_ms),
            ("end_of_word_dwell_ms", self.end_of_word_dwell_ms),
            ("advance_delay_ms", self.advance_delay_ms),
        ];
        match fields.iter().find(|(_, ms)| *ms == 0) {
            Some(&(field, _)) => Err(Error::InvalidDelay { field }),
            None => Ok(()),
        }
    }

    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }

    pub fn deleting_delay(&self) -> Duration {
        Duration::from_millis(self.deleting_delay_ms)
    }

    pub fn end_of_word_dwell(&self) -> Duration {
        Duration::from_millis(self.end_of_word_dwell_ms)
    }

    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TypewriterConfig::default();
        assert_eq!(config.typing_delay(), Duration::from_millis(80));
        assert_eq!(config.deleting_delay(), Duration::from_millis(40));
        assert_eq!(config.end_of_word_dwell(), Duration::from_millis(1600));
        assert_eq!(config.advance_delay(), Duration::from_millis(160));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_delay_rejected() {
        let config = TypewriterConfig::default().with_advance_delay_ms(0);
        match config.validate() {
            Err(Error::InvalidDelay { field }) => assert_eq!(field, "advance_delay_ms"),
            other => panic!("expected InvalidDelay, got {other:?}"),
        }
    }
}
