//! Magnetic buttons - buttons drift toward the pointer while hovered.

use crate::types::Rect;

/// Fraction of the pointer's offset from the centre applied to the button.
pub const PULL: f32 = 0.15;

/// A button that leans toward the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct MagneticButton {
    pub rect: Rect,
    pull: f32,
    offset: (f32, f32),
}

impl MagneticButton {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            pull: PULL,
            offset: (0.0, 0.0),
        }
    }

    pub fn with_pull(mut self, pull: f32) -> Self {
        self.pull = pull;
        self
    }

    /// Pointer at (`x`, `y`). Inside the button the offset follows the
    /// pointer; outside it snaps back to rest.
    ///
    /// Returns true if the offset changed.
    pub fn on_pointer(&mut self, x: u16, y: u16) -> bool {
        let next = if self.rect.contains(x, y) {
            let (cx, cy) = self.rect.center();
            ((x as f32 - cx) * self.pull, (y as f32 - cy) * self.pull)
        } else {
            (0.0, 0.0)
        };
        let changed = next != self.offset;
        self.offset = next;
        changed
    }

    /// Pointer left the screen or the button.
    pub fn on_leave(&mut self) {
        self.offset = (0.0, 0.0);
    }

    pub fn offset(&self) -> (f32, f32) {
        self.offset
    }

    /// Offset rounded to whole cells.
    pub fn cell_offset(&self) -> (i16, i16) {
        (self.offset.0.round() as i16, self.offset.1.round() as i16)
    }
}

/// A group of magnetic buttons, active only on hover-capable hosts.
#[derive(Debug, Clone, Default)]
pub struct MagneticGroup {
    buttons: Vec<MagneticButton>,
    enabled: bool,
}

impl MagneticGroup {
    /// `hover_capable` mirrors whether the host reports pointer hover
    /// (in a terminal: mouse capture is on).
    pub fn new(hover_capable: bool) -> Self {
        Self {
            buttons: Vec::new(),
            enabled: hover_capable,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn push(&mut self, button: MagneticButton) {
        self.buttons.push(button);
    }

    /// Replace button rects after a relayout, keeping order.
    pub fn set_rects(&mut self, rects: &[Rect]) {
        self.buttons = rects.iter().copied().map(MagneticButton::new).collect();
    }

    pub fn on_pointer(&mut self, x: u16, y: u16) -> bool {
        if !self.enabled {
            return false;
        }
        let mut changed = false;
        for button in &mut self.buttons {
            changed |= button.on_pointer(x, y);
        }
        changed
    }

    pub fn on_leave(&mut self) {
        for button in &mut self.buttons {
            button.on_leave();
        }
    }

    pub fn buttons(&self) -> &[MagneticButton] {
        &self.buttons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_follows_pointer() {
        // Centre at (20, 6)
        let mut button = MagneticButton::new(Rect::new(10, 4, 20, 4));
        assert!(button.on_pointer(29, 7));
        let (dx, dy) = button.offset();
        assert!((dx - 9.0 * PULL).abs() < 1e-6);
        assert!((dy - 1.0 * PULL).abs() < 1e-6);
        assert_eq!(button.cell_offset(), (1, 0));
    }

    #[test]
    fn test_outside_resets() {
        let mut button = MagneticButton::new(Rect::new(0, 0, 10, 3));
        button.on_pointer(9, 2);
        assert_ne!(button.offset(), (0.0, 0.0));
        assert!(button.on_pointer(40, 40));
        assert_eq!(button.offset(), (0.0, 0.0));
    }

    #[test]
    fn test_group_disabled_without_hover() {
        let mut group = MagneticGroup::new(false);
        group.set_rects(&[Rect::new(0, 0, 10, 3)]);
        assert!(!group.on_pointer(9, 2));
        assert_eq!(group.buttons()[0].offset(), (0.0, 0.0));
    }

    #[test]
    fn test_group_leave() {
        let mut group = MagneticGroup::new(true);
        group.set_rects(&[Rect::new(0, 0, 10, 3), Rect::new(12, 0, 10, 3)]);
        assert!(group.on_pointer(1, 0));
        group.on_leave();
        assert!(group.buttons().iter().all(|b| b.offset() == (0.0, 0.0)));
    }
}
