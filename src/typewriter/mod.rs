//! Typewriter - rotating text typed and erased one grapheme at a time.
//!
//! - [`words`] - the fixed label list
//! - [`shuffle`] - injectable random source and Fisher-Yates traversal order
//! - [`scheduler`] - the tick-driven state machine
//! - [`output`] - targets receiving the displayed prefix
//! - [`builder`] - startup validation
//! - [`config`] - delays

pub mod builder;
pub mod config;
pub mod output;
pub mod scheduler;
pub mod shuffle;
pub mod words;

pub use builder::TypewriterBuilder;
pub use config::TypewriterConfig;
pub use output::{RecordingTarget, SignalTarget, TextTarget};
pub use scheduler::{Phase, Tick, Transition, Typewriter};
pub use shuffle::{shuffle_in_place, RandomSource, RngSource, ScriptedSource, TraversalOrder};
pub use words::{WordList, LANGUAGES};
