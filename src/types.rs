//! Core types for spark-landing.
//!
//! Colors, cells and rectangles shared by the effects, the layout and the
//! renderer.

// =============================================================================
// Color
// =============================================================================

/// RGB color with 8-bit channels.
///
/// Special value: `TERMINAL_DEFAULT` lets the terminal pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Terminal default color (let terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }

    /// Linear mix toward `other`; `t` is clamped to [0, 1].
    ///
    /// Terminal default mixes as black.
    pub fn mix(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: i16, b: i16| {
            let a = a.max(0) as f32;
            let b = b.max(0) as f32;
            (a + (b - a) * t).round() as u8
        };
        Self::rgb(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }
}

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::DIM`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
    }
}

// =============================================================================
// Effect set (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Which landing effects are switched on.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Effects: u8 {
        const TYPEWRITER = 1 << 0;
        const LOADING = 1 << 1;
        const CURSOR_LIGHT = 1 << 2;
        const MAGNETIC = 1 << 3;
        const SCROLL_REVEAL = 1 << 4;
        const PARALLAX = 1 << 5;
    }
}

impl Default for Effects {
    fn default() -> Self {
        Self::all()
    }
}

// =============================================================================
// Cell - The atomic unit of terminal rendering
// =============================================================================

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgba,
    pub bg: Rgba,
    pub attrs: Attr,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: Rgba::TERMINAL_DEFAULT,
            bg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::NONE,
        }
    }
}

// =============================================================================
// Rect
// =============================================================================

/// Axis-aligned rectangle in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && (x as u32) < self.x as u32 + self.width as u32
            && y >= self.y
            && (y as u32) < self.y as u32 + self.height as u32
    }

    /// Geometric centre.
    pub fn center(&self) -> (f32, f32) {
        (
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }

    pub fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    pub fn bottom(&self) -> u32 {
        self.y as u32 + self.height as u32
    }
}
