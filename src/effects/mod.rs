//! Peripheral landing effects.
//!
//! Each effect is independent: none reads another's state or the
//! typewriter's. The mount loop feeds them clock time, pointer moves and
//! scroll offsets, and the scene reads them back when composing a frame.
//!
//! - [`loading`] - intro overlay timeline, effects start delay
//! - [`cursor_light`] - glow under the pointer, hidden when idle
//! - [`magnetic`] - buttons leaning toward the pointer
//! - [`reveal`] - one-way reveal on scroll intersection
//! - [`parallax`] - layer-speed background offsets
//! - [`smooth_scroll`] - eased scrolling to an anchor
//! - [`easing`] - cubic-bezier timing curves

pub mod cursor_light;
pub mod easing;
pub mod loading;
pub mod magnetic;
pub mod parallax;
pub mod reveal;
pub mod smooth_scroll;

pub use cursor_light::CursorLight;
pub use easing::{CubicBezier, EASE_IN_OUT, REVEAL_EASE};
pub use loading::{IntroConfig, LoadingSequence, OverlayPhase};
pub use magnetic::{MagneticButton, MagneticGroup};
pub use parallax::{parallax_offset, Orb};
pub use reveal::{visible_ratio, RevealConfig, RevealObserver, Viewport};
pub use smooth_scroll::SmoothScroll;
