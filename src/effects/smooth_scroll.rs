//! Smooth scroll - eased movement of the scroll offset toward an anchor.

use std::time::Duration;

use super::easing::{CubicBezier, EASE_IN_OUT};

/// Length of an anchor scroll.
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(500);

/// One scroll animation from `from` to `to`, starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    from: u16,
    to: u16,
    start: Duration,
    duration: Duration,
    curve: CubicBezier,
}

impl SmoothScroll {
    pub fn new(from: u16, to: u16, start: Duration) -> Self {
        Self {
            from,
            to,
            start,
            duration: SMOOTH_SCROLL_DURATION,
            curve: EASE_IN_OUT,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn target(&self) -> u16 {
        self.to
    }

    /// Scroll offset at `now`.
    pub fn offset_at(&self, now: Duration) -> u16 {
        if self.is_done(now) {
            return self.to;
        }
        let linear = now.saturating_sub(self.start).as_secs_f32() / self.duration.as_secs_f32();
        let eased = self.curve.at(linear);
        let delta = self.to as f32 - self.from as f32;
        (self.from as f32 + delta * eased).round() as u16
    }

    pub fn is_done(&self, now: Duration) -> bool {
        now >= self.start + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_scroll_down() {
        let scroll = SmoothScroll::new(0, 40, ms(100));
        assert_eq!(scroll.offset_at(ms(100)), 0);
        assert_eq!(scroll.offset_at(ms(350)), 20);
        assert!(!scroll.is_done(ms(599)));
        assert_eq!(scroll.offset_at(ms(600)), 40);
        assert!(scroll.is_done(ms(600)));
    }

    #[test]
    fn test_scroll_up() {
        let scroll = SmoothScroll::new(30, 10, ms(0)).with_duration(ms(200));
        let mid = scroll.offset_at(ms(50));
        assert!(mid < 30 && mid > 10);
        assert_eq!(scroll.offset_at(ms(1000)), 10);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let scroll = SmoothScroll::new(0, 12, ms(5)).with_duration(Duration::ZERO);
        assert_eq!(scroll.offset_at(ms(5)), 12);
    }
}
