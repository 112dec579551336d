//! CSS-style cubic-bezier timing curves.

/// A `cubic-bezier(x1, y1, x2, y2)` timing function with fixed end points
/// (0, 0) and (1, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

/// Section reveal curve.
pub const REVEAL_EASE: CubicBezier = CubicBezier::new(0.25, 0.46, 0.45, 0.94);

/// Browser `ease-in-out`, used for smooth scrolling.
pub const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

fn bezier(p1: f32, p2: f32, s: f32) -> f32 {
    let ms = 1.0 - s;
    3.0 * ms * ms * s * p1 + 3.0 * ms * s * s * p2 + s * s * s
}

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Eased progress for linear progress `t`, clamped to 0..=1.
    pub fn at(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        // x(s) is monotonic for x1, x2 in 0..=1
        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        let mut s = t;
        for _ in 0..24 {
            let x = bezier(self.x1, self.x2, s);
            if (x - t).abs() < 1e-5 {
                break;
            }
            if x < t {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        bezier(self.y1, self.y2, s).clamp(0.0, 1.0)
    }
}
