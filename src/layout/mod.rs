//! Layout Module
//!
//! Flexbox layout of the landing page using
//! [Taffy](https://github.com/DioxusLabs/taffy), plus terminal text
//! measurement.
//!
//! # Example
//!
//! ```ignore
//! use spark_landing::layout::{compute_landing_layout, LayoutInput};
//!
//! let layout = compute_landing_layout(&LayoutInput {
//!     viewport_width: 80,
//!     viewport_height: 24,
//!     ..input
//! })?;
//! ```

mod taffy_bridge;
mod text_measure;

pub use taffy_bridge::{
    compute_landing_layout, LandingLayout, LayoutInput, BUTTON_HEIGHT, BUTTON_PADDING,
    SECTION_GAP, SECTION_INSET,
};
pub use text_measure::*;
