//! Parallax - background orbs drift at layer-dependent speeds.

/// Speed added per layer.
pub const LAYER_SPEED: f32 = 0.2;

/// Speed of orb `index` relative to the scroll.
pub fn layer_speed(index: usize) -> f32 {
    (index + 1) as f32 * LAYER_SPEED
}

/// Vertical offset, in rows, of orb `index` at scroll offset `scroll_y`.
pub fn parallax_offset(scroll_y: u16, index: usize) -> f32 {
    scroll_y as f32 * layer_speed(index)
}

/// A decorative background orb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orb {
    /// Resting position in page rows/columns.
    pub x: u16,
    pub y: u16,
    pub radius: u16,
}

impl Orb {
    /// Page row of the orb's centre after parallax for layer `index`.
    pub fn shifted_y(&self, scroll_y: u16, index: usize) -> i32 {
        self.y as i32 + parallax_offset(scroll_y, index).round() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_speeds() {
        assert!((layer_speed(0) - 0.2).abs() < 1e-6);
        assert!((layer_speed(2) - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_offsets() {
        assert_eq!(parallax_offset(0, 3), 0.0);
        assert!((parallax_offset(10, 1) - 4.0).abs() < 1e-5);
        let orb = Orb {
            x: 5,
            y: 8,
            radius: 3,
        };
        assert_eq!(orb.shifted_y(10, 0), 10);
    }
}
