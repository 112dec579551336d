//! Differential renderer for fullscreen mode.
//!
//! The DiffRenderer compares the current frame to the previous frame and only
//! outputs cells that have changed, through crossterm commands.
//!
//! # Algorithm
//!
//! 1. Wrap output in a synchronized update
//! 2. For each cell in the new frame:
//!    - If previous frame exists and cell is unchanged: skip
//!    - Otherwise: move, switch style only if it differs, print
//! 3. Flush the writer once
//! 4. Store current frame as previous for next comparison

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::style::{
    Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use super::buffer::{FrameBuffer, CONTINUATION};
use crate::types::{Attr, Cell, Rgba};

fn to_color(color: Rgba) -> Color {
    if color.is_terminal_default() {
        Color::Reset
    } else {
        Color::Rgb {
            r: color.r.clamp(0, 255) as u8,
            g: color.g.clamp(0, 255) as u8,
            b: color.b.clamp(0, 255) as u8,
        }
    }
}

/// Style of the last cell written, to skip redundant SGR sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pen {
    fg: Rgba,
    bg: Rgba,
    attrs: Attr,
}

/// Differential renderer for fullscreen mode.
///
/// Keeps track of the previous frame to enable diff-based rendering.
pub struct DiffRenderer<W: Write> {
    out: W,
    pen: Option<Pen>,
    previous: Option<FrameBuffer>,
}

impl DiffRenderer<io::Stdout> {
    /// Renderer writing to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> DiffRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            pen: None,
            previous: None,
        }
    }

    /// Render a frame, outputting only changed cells.
    ///
    /// Returns true if any cells were changed.
    pub fn render(&mut self, buffer: &FrameBuffer) -> io::Result<bool> {
        let mut has_changes = false;
        queue!(self.out, BeginSynchronizedUpdate)?;
        self.pen = None;

        let width = buffer.width();
        let height = buffer.height();
        let previous = self
            .previous
            .take()
            .filter(|prev| prev.width() == width && prev.height() == height);

        for y in 0..height {
            for x in 0..width {
                let Some(cell) = buffer.get(x, y) else {
                    continue;
                };
                let changed = match &previous {
                    Some(prev) => prev.get(x, y) != Some(cell),
                    None => true,
                };
                if changed && cell.char != CONTINUATION {
                    has_changes = true;
                    self.render_cell(x, y, cell)?;
                }
            }
        }

        queue!(self.out, SetAttribute(Attribute::Reset), EndSynchronizedUpdate)?;
        self.out.flush()?;
        self.previous = Some(buffer.clone());
        Ok(has_changes)
    }

    fn render_cell(&mut self, x: u16, y: u16, cell: &Cell) -> io::Result<()> {
        let pen = Pen {
            fg: cell.fg,
            bg: cell.bg,
            attrs: cell.attrs,
        };
        queue!(self.out, MoveTo(x, y))?;
        if self.pen != Some(pen) {
            queue!(self.out, SetAttribute(Attribute::Reset))?;
            if cell.attrs.contains(Attr::BOLD) {
                queue!(self.out, SetAttribute(Attribute::Bold))?;
            }
            if cell.attrs.contains(Attr::DIM) {
                queue!(self.out, SetAttribute(Attribute::Dim))?;
            }
            if cell.attrs.contains(Attr::ITALIC) {
                queue!(self.out, SetAttribute(Attribute::Italic))?;
            }
            if cell.attrs.contains(Attr::UNDERLINE) {
                queue!(self.out, SetAttribute(Attribute::Underlined))?;
            }
            queue!(
                self.out,
                SetForegroundColor(to_color(cell.fg)),
                SetBackgroundColor(to_color(cell.bg))
            )?;
            self.pen = Some(pen);
        }
        queue!(self.out, Print(cell.char))
    }

    /// Invalidate the previous frame. Next render will be a full redraw.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Enter fullscreen mode (alternate screen, hidden cursor, mouse capture).
    ///
    /// With `mouse`, focus reporting is enabled too so a pointer leaving the
    /// terminal arrives as a focus-lost event.
    pub fn enter_fullscreen(&mut self, mouse: bool) -> io::Result<()> {
        execute!(self.out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        if mouse {
            execute!(self.out, EnableMouseCapture, EnableFocusChange)?;
        }
        self.invalidate();
        Ok(())
    }

    /// Exit fullscreen mode.
    pub fn exit_fullscreen(&mut self) -> io::Result<()> {
        execute!(
            self.out,
            DisableFocusChange,
            DisableMouseCapture,
            SetAttribute(Attribute::Reset),
            Show,
            LeaveAlternateScreen
        )
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

// =============================================================================
// Tests
// =============================================================================
