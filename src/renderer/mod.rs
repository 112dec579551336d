//! Renderer - frame buffer and terminal output.

mod buffer;
mod diff;

pub use buffer::{FrameBuffer, CONTINUATION};
pub use diff::DiffRenderer;
