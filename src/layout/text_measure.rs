//! Text Measurement
//!
//! Display widths in terminal cells, via `unicode-width`:
//! - ASCII characters: 1 cell
//! - CJK characters and most emoji: 2 cells
//! - Combining marks: 0 cells

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal cells, saturating at `u16::MAX`.
pub fn string_width(s: &str) -> u16 {
    UnicodeWidthStr::width(s).min(u16::MAX as usize) as u16
}

/// Widest entry of `words`.
pub fn max_width<'a>(words: impl IntoIterator<Item = &'a str>) -> u16 {
    words.into_iter().map(string_width).max().unwrap_or(0)
}

/// Cut `text` to at most `width` cells without splitting a grapheme.
pub fn truncate_text(text: &str, width: u16) -> &str {
    let mut used = 0u16;
    for (idx, grapheme) in text.grapheme_indices(true) {
        let w = string_width(grapheme);
        if used + w > width {
            return &text[..idx];
        }
        used += w;
    }
    text
}

/// Column at which `text` starts when centred in `width` cells.
pub fn centered_start(text: &str, x: u16, width: u16) -> u16 {
    x + width.saturating_sub(string_width(text)) / 2
}
