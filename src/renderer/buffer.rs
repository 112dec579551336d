//! FrameBuffer and drawing primitives.
//!
//! The FrameBuffer is a 2D grid of Cells representing one frame of the
//! viewport. All drawing clips silently at the buffer edges.
//!
//! Wide characters (CJK, most emoji) take two cells: the glyph cell and a
//! continuation cell holding [`CONTINUATION`], which the renderer skips.

use unicode_segmentation::UnicodeSegmentation;

use crate::layout::string_width;
use crate::types::{Attr, Cell, Rect, Rgba};

/// Marker for the second half of a wide character.
pub const CONTINUATION: char = '\0';

// =============================================================================
// FrameBuffer
// =============================================================================

/// A 2D buffer of terminal cells, row-major: `index = y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_background(width, height, Rgba::TERMINAL_DEFAULT)
    }

    /// Create a new buffer with a background color.
    pub fn with_background(width: u16, height: u16, bg: Rgba) -> Self {
        let size = width as usize * height as usize;
        let cell = Cell {
            bg,
            ..Cell::default()
        };
        Self {
            width,
            height,
            cells: vec![cell; size],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x as i32, y as i32) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if self.in_bounds(x as i32, y as i32) {
            let index = self.index(x, y);
            Some(&mut self.cells[index])
        } else {
            None
        }
    }

    /// Row text with continuation cells dropped (for tests and snapshots).
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|cell| cell.char)
            .filter(|&c| c != CONTINUATION)
            .collect()
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Fill a rectangle's background. Coordinates may be off-screen.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u16, height: u16, bg: Rgba) {
        for dy in 0..height as i32 {
            for dx in 0..width as i32 {
                let (cx, cy) = (x + dx, y + dy);
                if self.in_bounds(cx, cy) {
                    let index = self.index(cx as u16, cy as u16);
                    self.cells[index].bg = bg;
                }
            }
        }
    }

    /// Blend the foreground of a rectangle toward `toward` by `amount`.
    pub fn fade_text(&mut self, x: i32, y: i32, width: u16, height: u16, toward: Rgba, amount: f32) {
        if amount <= 0.0 {
            return;
        }
        for dy in 0..height as i32 {
            for dx in 0..width as i32 {
                let (cx, cy) = (x + dx, y + dy);
                if self.in_bounds(cx, cy) {
                    let index = self.index(cx as u16, cy as u16);
                    let cell = &mut self.cells[index];
                    cell.fg = cell.fg.mix(toward, amount);
                }
            }
        }
    }

    /// Draw text starting at (`x`, `y`), one grapheme per glyph.
    ///
    /// Keeps each cell's background. Returns the column after the text.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, fg: Rgba, attrs: Attr) -> i32 {
        let mut col = x;
        for grapheme in text.graphemes(true) {
            let width = string_width(grapheme) as i32;
            if width == 0 {
                continue;
            }
            let ch = grapheme.chars().next().unwrap_or(' ');
            self.put(col, y, ch, fg, attrs);
            if width == 2 {
                self.put(col + 1, y, CONTINUATION, fg, attrs);
            }
            col += width;
        }
        col
    }

    fn put(&mut self, x: i32, y: i32, ch: char, fg: Rgba, attrs: Attr) {
        if !self.in_bounds(x, y) {
            return;
        }
        let index = self.index(x as u16, y as u16);
        let cell = &mut self.cells[index];
        cell.char = ch;
        cell.fg = fg;
        cell.attrs = attrs;
    }

    /// Draw a rounded single-line box outline.
    pub fn draw_border(&mut self, rect: Rect, dx: i32, dy: i32, fg: Rgba) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let left = rect.x as i32 + dx;
        let top = rect.y as i32 + dy;
        let right = left + rect.width as i32 - 1;
        let bottom = top + rect.height as i32 - 1;

        for x in left + 1..right {
            self.put(x, top, '─', fg, Attr::NONE);
            self.put(x, bottom, '─', fg, Attr::NONE);
        }
        for y in top + 1..bottom {
            self.put(left, y, '│', fg, Attr::NONE);
            self.put(right, y, '│', fg, Attr::NONE);
        }
        self.put(left, top, '╭', fg, Attr::NONE);
        self.put(right, top, '╮', fg, Attr::NONE);
        self.put(left, bottom, '╰', fg, Attr::NONE);
        self.put(right, bottom, '╯', fg, Attr::NONE);
    }

    /// Blend every cell's background toward `color` by `amount(x, y)`.
    pub fn tint(&mut self, color: Rgba, base: Rgba, amount: impl Fn(u16, u16) -> f32) {
        for y in 0..self.height {
            for x in 0..self.width {
                let t = amount(x, y);
                if t <= 0.0 {
                    continue;
                }
                let index = self.index(x, y);
                let cell = &mut self.cells[index];
                let from = if cell.bg.is_terminal_default() { base } else { cell.bg };
                cell.bg = from.mix(color, t);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer() {
        let buffer = FrameBuffer::new(4, 2);
        assert_eq!(buffer.row_text(1), "    ");
        assert!(buffer.get(4, 0).is_none());
    }

    #[test]
    fn test_draw_text_clips() {
        let mut buffer = FrameBuffer::new(5, 1);
        let end = buffer.draw_text(-1, 0, "Svenska", Rgba::WHITE, Attr::BOLD);
        assert_eq!(end, 6);
        assert_eq!(buffer.row_text(0), "vensk");
        assert_eq!(buffer.get(0, 0).unwrap().attrs, Attr::BOLD);
    }

    #[test]
    fn test_wide_chars() {
        let mut buffer = FrameBuffer::new(6, 1);
        buffer.draw_text(0, 0, "日本", Rgba::WHITE, Attr::NONE);
        assert_eq!(buffer.get(1, 0).unwrap().char, CONTINUATION);
        assert_eq!(buffer.row_text(0), "日本  ");
    }

    #[test]
    fn test_border() {
        let mut buffer = FrameBuffer::new(4, 3);
        buffer.draw_border(Rect::new(0, 0, 4, 3), 0, 0, Rgba::WHITE);
        assert_eq!(buffer.row_text(0), "╭──╮");
        assert_eq!(buffer.row_text(1), "│  │");
        assert_eq!(buffer.row_text(2), "╰──╯");
    }

    #[test]
    fn test_tint() {
        let mut buffer = FrameBuffer::new(2, 1);
        buffer.tint(Rgba::WHITE, Rgba::BLACK, |x, _| if x == 0 { 1.0 } else { 0.0 });
        assert_eq!(buffer.get(0, 0).unwrap().bg, Rgba::WHITE);
        assert_eq!(buffer.get(1, 0).unwrap().bg, Rgba::TERMINAL_DEFAULT);
    }

    #[test]
    fn test_fade_text() {
        let mut buffer = FrameBuffer::new(3, 1);
        buffer.draw_text(0, 0, "abc", Rgba::WHITE, Attr::NONE);
        buffer.fade_text(1, 0, 5, 1, Rgba::BLACK, 1.0);
        assert_eq!(buffer.get(0, 0).unwrap().fg, Rgba::WHITE);
        assert_eq!(buffer.get(1, 0).unwrap().fg, Rgba::BLACK);
        assert_eq!(buffer.get(2, 0).unwrap().fg, Rgba::BLACK);
        assert_eq!(buffer.row_text(0), "abc");
    }
}
