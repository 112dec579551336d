//! # spark-landing
//!
//! A terminal landing screen with a rotating typewriter headline.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! the shared display text, ready flag and terminal size.
//!
//! ## Architecture
//!
//! Everything is driven by a clock and a single event loop. Timers never
//! sleep on their own: each state machine reports the delay until its next
//! step and the loop wakes at the earliest one.
//!
//! ```text
//! mount ─▶ ready signal ─▶ StartGate (loading hide + settle)
//!                              │
//!                              ▼
//!            Typewriter::tick ─▶ TextTarget ─▶ compose ─▶ DiffRenderer
//!            CursorLight / Magnetic / Reveal / Parallax ──┘
//! ```
//!
//! ## Modules
//!
//! - [`typewriter`] - word list, shuffle, tick scheduler, output targets
//! - [`effects`] - loading overlay, cursor light, magnetic buttons, scroll reveal, parallax,
//!   smooth anchor scrolling
//! - [`state`] - clocks, timer slots, the ready signal, caret blink, input events
//! - [`layout`] - Taffy page layout and text measurement
//! - [`renderer`] - frame buffer and differential terminal output
//! - [`pipeline`] - the landing scene and the mount loop

pub mod effects;
pub mod error;
pub mod layout;
pub mod pipeline;
pub mod renderer;
pub mod state;
pub mod types;
pub mod typewriter;

// Re-export commonly used items
pub use types::*;

pub use error::{Error, Result};

pub use typewriter::{
    RandomSource, RecordingTarget, RngSource, ScriptedSource, SignalTarget, TextTarget, Tick,
    Transition, Typewriter, TypewriterBuilder, TypewriterConfig, WordList, LANGUAGES,
};

pub use effects::{
    CursorLight, IntroConfig, LoadingSequence, MagneticGroup, OverlayPhase, RevealConfig,
    RevealObserver, SmoothScroll, Viewport,
};

pub use state::{mark_ready, ready_signal, start_after, Clock, ManualClock, StartGate, SystemClock, TimerSlot};

pub use renderer::{DiffRenderer, FrameBuffer};

pub use pipeline::{mount, run, LandingConfig, LandingContent, LandingScreen, MountHandle};
