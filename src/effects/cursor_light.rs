//! Cursor light - a soft glow that follows the pointer and fades when idle.

use std::time::Duration;

/// Idle time after which the light hides.
pub const IDLE_HIDE: Duration = Duration::from_millis(2000);

/// Glow radius in cells.
pub const DEFAULT_RADIUS: f32 = 6.0;

/// Pointer-following light.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorLight {
    x: u16,
    y: u16,
    visible: bool,
    last_move: Option<Duration>,
    idle_hide: Duration,
    radius: f32,
}

impl Default for CursorLight {
    fn default() -> Self {
        Self::new(IDLE_HIDE, DEFAULT_RADIUS)
    }
}

impl CursorLight {
    pub fn new(idle_hide: Duration, radius: f32) -> Self {
        Self {
            x: 0,
            y: 0,
            visible: false,
            last_move: None,
            idle_hide,
            radius,
        }
    }

    /// Pointer moved to (`x`, `y`) at `now`. Shows the light and restarts
    /// the idle timer.
    pub fn on_move(&mut self, x: u16, y: u16, now: Duration) {
        self.x = x;
        self.y = y;
        self.visible = true;
        self.last_move = Some(now);
    }

    /// Hide the light once the pointer has been idle long enough.
    ///
    /// Returns true if visibility changed.
    pub fn update(&mut self, now: Duration) -> bool {
        match self.last_move {
            Some(at) if self.visible && now.saturating_sub(at) >= self.idle_hide => {
                self.visible = false;
                true
            }
            _ => false,
        }
    }

    /// Time from `now` until the idle timeout hides the light.
    pub fn hides_in(&self, now: Duration) -> Option<Duration> {
        if !self.visible {
            return None;
        }
        self.last_move
            .map(|at| (at + self.idle_hide).saturating_sub(now))
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    /// Glow strength at a cell, 1 at the centre falling to 0 at the radius.
    ///
    /// Terminal cells are about twice as tall as wide, so vertical distance
    /// counts double.
    pub fn intensity_at(&self, x: u16, y: u16) -> f32 {
        if !self.visible || self.radius <= 0.0 {
            return 0.0;
        }
        let dx = x as f32 - self.x as f32;
        let dy = (y as f32 - self.y as f32) * 2.0;
        let distance = (dx * dx + dy * dy).sqrt();
        (1.0 - distance / self.radius).max(0.0)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_hidden_until_moved() {
        let mut light = CursorLight::default();
        assert!(!light.is_visible());
        assert!(!light.update(ms(10_000)));
        assert_eq!(light.intensity_at(0, 0), 0.0);
    }

    #[test]
    fn test_idle_hide() {
        let mut light = CursorLight::default();
        light.on_move(10, 5, ms(0));
        assert!(light.is_visible());
        assert!(!light.update(ms(1999)));

        // Moving again restarts the idle timer
        light.on_move(11, 5, ms(1500));
        assert!(!light.update(ms(3000)));
        assert!(light.update(ms(3500)));
        assert!(!light.is_visible());
        assert!(!light.update(ms(4000)));
    }

    #[test]
    fn test_intensity_falloff() {
        let mut light = CursorLight::new(IDLE_HIDE, 4.0);
        light.on_move(10, 10, ms(0));
        assert_eq!(light.intensity_at(10, 10), 1.0);
        assert!((light.intensity_at(12, 10) - 0.5).abs() < 1e-6);
        // One row down is two columns of distance
        assert!((light.intensity_at(10, 11) - 0.5).abs() < 1e-6);
        assert_eq!(light.intensity_at(20, 10), 0.0);
    }

    #[test]
    fn test_hides_in() {
        let mut light = CursorLight::default();
        assert_eq!(light.hides_in(ms(0)), None);
        light.on_move(3, 3, ms(100));
        assert_eq!(light.hides_in(ms(600)), Some(ms(1500)));
        light.update(ms(2100));
        assert_eq!(light.hides_in(ms(2100)), None);
    }
}
