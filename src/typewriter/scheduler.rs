//! Typewriter state machine.
//!
//! One [`Typewriter::tick`] advances the machine by one step, writes the
//! displayed prefix to the output target, and returns the delay to wait
//! before the next tick. The machine never terminates.
//!
//! ```text
//!   Typing ──(prefix == word, dwell)──▶ Deleting
//!     ▲                                    │
//!     └──(prefix empty, advance, maybe reshuffle)
//! ```
//!
//! The end-of-word pause and the advance to the next word are not separate
//! ticks: they are the elevated delays returned by the tick that completes
//! the word or empties it.

use std::time::Duration;

use log::debug;
use unicode_segmentation::UnicodeSegmentation;

use super::config::TypewriterConfig;
use super::output::TextTarget;
use super::shuffle::{RandomSource, TraversalOrder};
use super::words::WordList;

// =============================================================================
// TYPES
// =============================================================================

/// Which way the prefix is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Typing,
    Deleting,
}

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// One grapheme appended.
    Typed,
    /// Word completed; the returned delay is the dwell.
    Dwell,
    /// One grapheme removed.
    Deleted,
    /// Prefix emptied; moved to the next word, reshuffling on wrap.
    Advanced { reshuffled: bool },
}

/// Result of one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    /// Text written to the target during this tick.
    pub text: String,
    /// Wait before the next tick.
    pub delay: Duration,
    /// Phase the machine is in after this tick.
    pub phase: Phase,
    pub transition: Transition,
}

// =============================================================================
// TYPEWRITER
// =============================================================================

/// Rotating-word typewriter.
///
/// Build one with [`TypewriterBuilder`](super::builder::TypewriterBuilder).
pub struct Typewriter<R> {
    words: WordList,
    order: TraversalOrder,
    rng: R,
    target: Box<dyn TextTarget>,
    config: TypewriterConfig,
    /// Position inside `order`.
    position: usize,
    /// Graphemes of the current word currently shown.
    shown: usize,
    phase: Phase,
    /// Completed passes over the traversal order.
    cycles: u64,
}

impl<R: RandomSource> Typewriter<R> {
    /// Assemble a typewriter. Inputs are assumed validated by the builder.
    pub(crate) fn from_parts(
        words: WordList,
        mut rng: R,
        target: Box<dyn TextTarget>,
        config: TypewriterConfig,
    ) -> Self {
        let order = TraversalOrder::shuffled(&words, &mut rng);
        Self {
            words,
            order,
            rng,
            target,
            config,
            position: 0,
            shown: 0,
            phase: Phase::Typing,
            cycles: 0,
        }
    }

    /// Advance one step and return what happened.
    pub fn tick(&mut self) -> Tick {
        let word_len = self.current_word().graphemes(true).count();

        let (mut delay, mut transition) = match self.phase {
            Phase::Typing => {
                self.shown = (self.shown + 1).min(word_len);
                (self.config.typing_delay(), Transition::Typed)
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                (self.config.deleting_delay(), Transition::Deleted)
            }
        };

        let text = self.text().to_string();
        self.target.write_text(&text);

        match self.phase {
            Phase::Typing if self.shown == word_len => {
                self.phase = Phase::Deleting;
                delay = self.config.end_of_word_dwell();
                transition = Transition::Dwell;
            }
            Phase::Deleting if self.shown == 0 => {
                let reshuffled = self.advance();
                delay = self.config.advance_delay();
                transition = Transition::Advanced { reshuffled };
            }
            _ => {}
        }

        Tick {
            text,
            delay,
            phase: self.phase,
            transition,
        }
    }

    /// Move to the next traversal position, reshuffling on wrap.
    fn advance(&mut self) -> bool {
        self.phase = Phase::Typing;
        self.position = (self.position + 1) % self.order.len();
        if self.position != 0 {
            return false;
        }

        self.order = TraversalOrder::shuffled(&self.words, &mut self.rng);
        self.cycles += 1;
        debug!(
            "typewriter: pass {} complete, reshuffled {} words",
            self.cycles,
            self.order.len()
        );
        true
    }

    // =========================================================================
    // STATE QUERY
    // =========================================================================

    /// Currently displayed prefix.
    pub fn text(&self) -> &str {
        grapheme_prefix(self.current_word(), self.shown)
    }

    /// Word being typed or deleted.
    pub fn current_word(&self) -> &str {
        &self.words[self.order.word_index(self.position)]
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Position inside the current traversal order.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn order(&self) -> &TraversalOrder {
        &self.order
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn config(&self) -> &TypewriterConfig {
        &self.config
    }

    /// Number of full passes completed (equals reshuffles after the first).
    pub fn cycles(&self) -> u64 {
        self.cycles
    }
}

/// First `count` extended grapheme clusters of `word`.
fn grapheme_prefix(word: &str, count: usize) -> &str {
    match word.grapheme_indices(true).nth(count) {
        Some((end, _)) => &word[..end],
        None => word,
    }
}

// =============================================================================
// TESTS
// =============================================================================
