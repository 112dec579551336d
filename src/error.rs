//! Error types.
//!
//! Everything that can go wrong happens at startup: building a typewriter
//! from an empty word list or without an output target, or mounting onto a
//! terminal that refuses raw mode. Once the loop is running, ticks are
//! infallible.

use std::io;

use thiserror::Error;

/// Errors raised while assembling or mounting a landing screen.
#[derive(Debug, Error)]
pub enum Error {
    /// The word list has no entries, so there is nothing to shuffle or type.
    #[error("word list is empty")]
    EmptyWordList,

    /// No output target was attached before starting the typewriter.
    #[error("no output target attached to the typewriter")]
    MissingTarget,

    /// A configured delay is zero. Ticks must always be spaced apart.
    #[error("delay `{field}` must be greater than zero")]
    InvalidDelay { field: &'static str },

    /// The layout engine rejected the page tree.
    #[error("layout: {0}")]
    Layout(String),

    /// Terminal I/O failed.
    #[error("terminal i/o: {0}")]
    Io(#[from] io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
