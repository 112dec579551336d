//! Scroll reveal - sections fade in the first time enough of them is on
//! screen.
//!
//! Elements live in page coordinates (row 0 is the top of the page); the
//! viewport is a window of the page starting at the scroll offset. The
//! bottom root margin shrinks the viewport so elements reveal slightly
//! after they cross the bottom edge.
//!
//! A reveal is not instant: from the moment it triggers, the element fades
//! in from the background and slides up [`REVEAL_SHIFT_ROWS`] rows over
//! `duration_ms`, eased with [`REVEAL_EASE`].

use std::time::Duration;

use super::easing::REVEAL_EASE;
use crate::types::Rect;

/// Minimum visible fraction for a reveal.
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// Rows trimmed from the bottom of the viewport.
pub const DEFAULT_BOTTOM_MARGIN: u16 = 2;

/// Length of the reveal transition.
pub const DEFAULT_REVEAL_MS: u64 = 800;

/// Rows a section slides up while revealing.
pub const REVEAL_SHIFT_ROWS: f32 = 2.0;

/// Observer settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RevealConfig {
    pub threshold: f32,
    pub bottom_margin: u16,
    pub duration_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            bottom_margin: DEFAULT_BOTTOM_MARGIN,
            duration_ms: DEFAULT_REVEAL_MS,
        }
    }
}

/// Visible part of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub scroll_y: u16,
    pub width: u16,
    pub height: u16,
}

/// Fraction of `element` inside `viewport` after the bottom margin.
pub fn visible_ratio(element: Rect, viewport: Viewport, bottom_margin: u16) -> f32 {
    let top = viewport.scroll_y as u32;
    let bottom = top + viewport.height.saturating_sub(bottom_margin) as u32;
    let left = 0u32;
    let right = viewport.width as u32;

    let el_left = element.x as u32;
    let el_right = el_left + element.width as u32;
    let el_top = element.y as u32;
    let el_bottom = element.bottom();

    if element.area() == 0 {
        let inside = el_top >= top && el_top < bottom && el_left >= left && el_left < right;
        return if inside { 1.0 } else { 0.0 };
    }

    let w = el_right.min(right).saturating_sub(el_left.max(left));
    let h = el_bottom.min(bottom).saturating_sub(el_top.max(top));
    (w * h) as f32 / element.area() as f32
}

/// Tracks which elements have been revealed. Reveals never undo.
#[derive(Debug, Clone, Default)]
pub struct RevealObserver {
    config: RevealConfig,
    elements: Vec<Rect>,
    /// When each element was revealed.
    revealed: Vec<Option<Duration>>,
}

impl RevealObserver {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            elements: Vec::new(),
            revealed: Vec::new(),
        }
    }

    /// Start observing an element. Returns its id.
    pub fn observe(&mut self, element: Rect) -> usize {
        self.elements.push(element);
        self.revealed.push(None);
        self.elements.len() - 1
    }

    /// Move an element after relayout without touching its reveal state.
    pub fn update_rect(&mut self, id: usize, element: Rect) {
        if let Some(slot) = self.elements.get_mut(id) {
            *slot = element;
        }
    }

    /// Check every unrevealed element against `viewport` at `now`.
    ///
    /// Returns the ids revealed by this call.
    pub fn check(&mut self, viewport: Viewport, now: Duration) -> Vec<usize> {
        let mut newly = Vec::new();
        for (id, element) in self.elements.iter().enumerate() {
            if self.revealed[id].is_some() {
                continue;
            }
            let ratio = visible_ratio(*element, viewport, self.config.bottom_margin);
            if ratio > 0.0 && ratio >= self.config.threshold {
                self.revealed[id] = Some(now);
                newly.push(id);
            }
        }
        newly
    }

    pub fn is_revealed(&self, id: usize) -> bool {
        self.revealed.get(id).is_some_and(Option::is_some)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.config.duration_ms)
    }

    /// Eased reveal progress of `id` at `now`: 0 while hidden, 1 once the
    /// transition is over.
    pub fn progress_at(&self, id: usize, now: Duration) -> f32 {
        let Some(Some(at)) = self.revealed.get(id).copied() else {
            return 0.0;
        };
        let duration = self.duration();
        if duration.is_zero() {
            return 1.0;
        }
        let linear = now.saturating_sub(at).as_secs_f32() / duration.as_secs_f32();
        REVEAL_EASE.at(linear)
    }

    /// Rows `id` still sits below its resting place at `now`.
    pub fn shift_at(&self, id: usize, now: Duration) -> i32 {
        ((1.0 - self.progress_at(id, now)) * REVEAL_SHIFT_ROWS).round() as i32
    }

    /// Whether any reveal transition is still running at `now`.
    pub fn in_flight(&self, now: Duration) -> bool {
        let duration = self.duration();
        self.revealed
            .iter()
            .flatten()
            .any(|&at| now < at + duration)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
