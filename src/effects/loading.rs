//! Intro timeline - loading overlay and the delayed start of the effects.
//!
//! Every time here is measured from the moment the screen became ready.

use std::time::Duration;

/// Intro timing, in milliseconds after ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IntroConfig {
    /// When the overlay starts fading.
    pub loading_hide_ms: u64,
    /// Fade length before the overlay is removed.
    pub overlay_fade_ms: u64,
    /// Pause between the overlay starting to fade and the effects starting.
    pub effects_settle_ms: u64,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            loading_hide_ms: 2500,
            overlay_fade_ms: 600,
            effects_settle_ms: 500,
        }
    }
}

impl IntroConfig {
    /// Delay after ready before the typewriter and pointer effects start.
    pub fn effects_start(&self) -> Duration {
        Duration::from_millis(self.loading_hide_ms + self.effects_settle_ms)
    }

    pub fn loading_sequence(&self) -> LoadingSequence {
        LoadingSequence {
            hide_at: Duration::from_millis(self.loading_hide_ms),
            fade: Duration::from_millis(self.overlay_fade_ms),
        }
    }
}

/// Overlay state at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayPhase {
    Visible,
    /// Fading out; `progress` runs from 0 to 1.
    Fading { progress: f32 },
    Removed,
}

/// Loading overlay timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingSequence {
    pub hide_at: Duration,
    pub fade: Duration,
}

impl Default for LoadingSequence {
    fn default() -> Self {
        IntroConfig::default().loading_sequence()
    }
}

impl LoadingSequence {
    /// Overlay phase `elapsed` after ready.
    pub fn phase_at(&self, elapsed: Duration) -> OverlayPhase {
        if elapsed < self.hide_at {
            return OverlayPhase::Visible;
        }
        let into_fade = elapsed - self.hide_at;
        if into_fade >= self.fade {
            return OverlayPhase::Removed;
        }
        OverlayPhase::Fading {
            progress: into_fade.as_secs_f32() / self.fade.as_secs_f32(),
        }
    }

    /// Whether the screen is still in its loading state (input muted).
    pub fn is_loading(&self, elapsed: Duration) -> bool {
        elapsed < self.hide_at
    }

    pub fn removed_at(&self) -> Duration {
        self.hide_at + self.fade
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_effects_start_derives_from_overlay() {
        let config = IntroConfig::default();
        assert_eq!(config.effects_start(), ms(3000));

        let shorter = IntroConfig {
            loading_hide_ms: 1000,
            ..config
        };
        assert_eq!(shorter.effects_start(), ms(1500));
    }

    #[test]
    fn test_phases() {
        let seq = LoadingSequence::default();
        assert_eq!(seq.phase_at(ms(0)), OverlayPhase::Visible);
        assert_eq!(seq.phase_at(ms(2499)), OverlayPhase::Visible);
        assert_eq!(seq.phase_at(ms(2500)), OverlayPhase::Fading { progress: 0.0 });
        match seq.phase_at(ms(2800)) {
            OverlayPhase::Fading { progress } => assert!((progress - 0.5).abs() < 1e-3),
            other => panic!("expected fading, got {other:?}"),
        }
        assert_eq!(seq.phase_at(ms(3100)), OverlayPhase::Removed);
        assert_eq!(seq.removed_at(), ms(3100));
    }

    #[test]
    fn test_zero_fade_removes_immediately() {
        let seq = LoadingSequence {
            hide_at: ms(100),
            fade: Duration::ZERO,
        };
        assert_eq!(seq.phase_at(ms(100)), OverlayPhase::Removed);
        assert!(!seq.is_loading(ms(100)));
    }
}
