//! Landing pipeline
//!
//! Connects the effects, typewriter and layout to the terminal.
//!
//! ```text
//! crossterm events ─▶ InputEvent ─▶ LandingScreen::handle
//! clock ─────────────────────────▶ LandingScreen::update ─▶ compose ─▶ DiffRenderer
//! ```
//!
//! - [`content`] - copy, colors and settings
//! - [`scene`] - the landing screen state and frame composition
//! - [`terminal`] - terminal size signals
//! - [`mount`] - terminal lifecycle and the event loop

pub mod content;
pub mod mount;
pub mod scene;
pub mod terminal;

// Re-exports
pub use content::{Button, LandingConfig, LandingContent, Palette, Section};
pub use mount::{mount, run, step, MountHandle};
pub use scene::LandingScreen;
pub use terminal::{detect_terminal_size, set_terminal_size, terminal_height, terminal_size, terminal_width};
