//! Landing scene - owns every effect and composes frames.
//!
//! The scene is driven entirely from outside: the mount loop hands it the
//! clock time and input events, asks when it next needs to wake, and asks
//! for a frame. Tests do the same with a [`ManualClock`](crate::state::ManualClock).
//!
//! ```text
//! ready signal ──▶ StartGate ──▶ start(): arm typewriter timer, caret blink
//!                                  │
//! update(now) ──▶ TimerSlot::fire ─┴▶ Typewriter::tick ──▶ SignalTarget
//!             ──▶ SmoothScroll offset, reveal transitions
//! compose(now) ──▶ orbs, title, rotating line, buttons, sections, light, overlay
//! ```

use std::time::Duration;

use log::{debug, info};
use spark_signals::Signal;

use super::content::{LandingConfig, LandingContent};
use crate::effects::{
    CursorLight, LoadingSequence, MagneticGroup, Orb, OverlayPhase, RevealObserver, SmoothScroll,
    Viewport,
};
use crate::error::Result;
use crate::layout::{
    centered_start, compute_landing_layout, max_width, string_width, truncate_text,
    LandingLayout, LayoutInput, BUTTON_PADDING,
};
use crate::renderer::FrameBuffer;
use crate::state::animate::{blink_phase, next_blink_toggle, subscribe_to_blink};
use crate::state::{start_after, InputEvent, StartGate, TimerSlot};
use crate::typewriter::{RandomSource, SignalTarget, Typewriter, TypewriterBuilder};
use crate::types::{Attr, Effects, Rgba};

/// Longest the loop may sleep while something is animating.
pub const FRAME_BUDGET: Duration = Duration::from_millis(16);

/// Longest the loop may sleep when idle.
pub const IDLE_BUDGET: Duration = Duration::from_millis(250);

const CARET: &str = "▌";
const LIGHT_STRENGTH: f32 = 0.35;

/// The landing screen.
pub struct LandingScreen<R> {
    content: LandingContent,
    config: LandingConfig,
    typewriter: Typewriter<R>,
    text: SignalTarget,
    timer: TimerSlot,
    gate: StartGate,
    loading: LoadingSequence,
    light: CursorLight,
    magnetic: MagneticGroup,
    reveal: RevealObserver,
    orbs: Vec<Orb>,
    layout: LandingLayout,
    viewport: Viewport,
    /// Anchor scroll in progress.
    scroll: Option<SmoothScroll>,
    /// A reveal transition was running at the last update.
    revealing: bool,
    started: bool,
    caret_visible: bool,
    overlay: OverlayPhase,
    stop_caret: Option<Box<dyn FnOnce()>>,
}

impl<R: RandomSource> LandingScreen<R> {
    /// Validate the content and lay out the page for a `width`×`height`
    /// terminal. Effects start `intro.effects_start()` after `ready` is set.
    pub fn new(
        content: LandingContent,
        config: LandingConfig,
        rng: R,
        ready: Signal<bool>,
        hover_capable: bool,
        (width, height): (u16, u16),
    ) -> Result<Self> {
        let text = SignalTarget::new();
        let typewriter = TypewriterBuilder::with_random_source(rng)
            .word_list(content.words.clone())
            .target(text.clone())
            .config(config.typewriter)
            .build()?;

        let mut screen = Self {
            gate: start_after(ready, config.intro.effects_start()),
            loading: config.intro.loading_sequence(),
            light: CursorLight::default(),
            magnetic: MagneticGroup::new(hover_capable && config.effects.contains(Effects::MAGNETIC)),
            reveal: RevealObserver::new(config.reveal),
            orbs: Vec::new(),
            layout: LandingLayout::default(),
            viewport: Viewport {
                scroll_y: 0,
                width,
                height,
            },
            scroll: None,
            revealing: false,
            started: false,
            caret_visible: true,
            overlay: OverlayPhase::Visible,
            stop_caret: None,
            timer: TimerSlot::new(),
            content,
            config,
            typewriter,
            text,
        };
        screen.relayout()?;
        for &rect in &screen.layout.sections {
            screen.reveal.observe(rect);
        }
        Ok(screen)
    }

    fn relayout(&mut self) -> Result<()> {
        let words = self.content.words.iter();
        let input = LayoutInput {
            viewport_width: self.viewport.width,
            viewport_height: self.viewport.height,
            title_width: string_width(&self.content.title),
            rotating_width: max_width(words) + string_width(CARET),
            button_label_widths: self
                .content
                .buttons
                .iter()
                .map(|b| string_width(&b.label))
                .collect(),
            section_heights: self.content.sections.iter().map(|s| s.height()).collect(),
        };
        self.layout = compute_landing_layout(&input)?;
        self.magnetic.set_rects(&self.layout.buttons);
        for (id, &rect) in self.layout.sections.iter().enumerate() {
            self.reveal.update_rect(id, rect);
        }

        let (w, h) = (self.viewport.width, self.layout.page_height);
        self.orbs = vec![
            Orb {
                x: w / 5,
                y: h / 6,
                radius: 6,
            },
            Orb {
                x: w * 4 / 5,
                y: h / 3,
                radius: 8,
            },
            Orb {
                x: w / 2,
                y: h * 2 / 3,
                radius: 5,
            },
        ];
        self.clamp_scroll();
        Ok(())
    }

    fn max_scroll(&self) -> u16 {
        self.layout.page_height.saturating_sub(self.viewport.height)
    }

    fn clamp_scroll(&mut self) {
        self.viewport.scroll_y = self.viewport.scroll_y.min(self.max_scroll());
    }

    fn effect(&self, effect: Effects) -> bool {
        self.config.effects.contains(effect)
    }

    // =========================================================================
    // Driving
    // =========================================================================

    fn start(&mut self, now: Duration) {
        info!("landing: starting effects");
        self.started = true;
        if self.effect(Effects::TYPEWRITER) {
            self.timer.arm(now, Duration::ZERO);
            self.stop_caret = Some(subscribe_to_blink(self.config.caret_fps, now));
        }
        self.check_reveal(now);
    }

    fn check_reveal(&mut self, now: Duration) {
        if !self.started || !self.effect(Effects::SCROLL_REVEAL) {
            return;
        }
        let revealed = self.reveal.check(self.viewport, now);
        if !revealed.is_empty() {
            debug!("landing: revealed sections {revealed:?}");
        }
    }

    /// Advance timers to `now`. Returns true if the frame changed.
    pub fn update(&mut self, now: Duration) -> bool {
        let mut dirty = false;

        if self.gate.poll(now) {
            self.start(now);
            dirty = true;
        }

        let overlay = self.overlay_at(now);
        if overlay != self.overlay {
            self.overlay = overlay;
            dirty = true;
        }

        if let Some(scroll) = self.scroll {
            let offset = scroll.offset_at(now).min(self.max_scroll());
            if offset != self.viewport.scroll_y {
                self.viewport.scroll_y = offset;
                self.check_reveal(now);
                dirty = true;
            }
            if scroll.is_done(now) {
                self.scroll = None;
            }
        }

        if !self.started {
            return dirty;
        }

        let typewriter = &mut self.typewriter;
        if self.timer.fire(now, || typewriter.tick().delay) {
            dirty = true;
        }

        let caret = blink_phase(self.config.caret_fps, now);
        if caret != self.caret_visible {
            self.caret_visible = caret;
            dirty = true;
        }

        // One more frame after the last transition ends, to land on 1.0
        let revealing = self.reveal.in_flight(now);
        dirty |= revealing || self.revealing;
        self.revealing = revealing;

        dirty |= self.light.update(now);
        dirty
    }

    /// Apply one input event. Returns true if the frame changed.
    pub fn handle(&mut self, event: InputEvent, now: Duration) -> Result<bool> {
        match event {
            InputEvent::PointerMove { x, y } => Ok(self.on_pointer(x, y, now)),
            InputEvent::Click { x, y } => Ok(self.on_click(x, y, now)),
            InputEvent::PointerLeave => {
                self.magnetic.on_leave();
                Ok(true)
            }
            InputEvent::Activate(index) => Ok(self.activate(index, now)),
            InputEvent::Scroll(delta) => Ok(self.scroll_by(delta, now)),
            InputEvent::Resize(width, height) => {
                self.resize(width, height, now)?;
                Ok(true)
            }
            InputEvent::Quit | InputEvent::None => Ok(false),
        }
    }

    fn on_pointer(&mut self, x: u16, y: u16, now: Duration) -> bool {
        if !self.started {
            return false;
        }
        let mut dirty = false;
        if self.effect(Effects::CURSOR_LIGHT) {
            self.light.on_move(x, y, now);
            dirty = true;
        }
        dirty |= self
            .magnetic
            .on_pointer(x, y.saturating_add(self.viewport.scroll_y));
        dirty
    }

    /// Activate the button under a click, if any.
    fn on_click(&mut self, x: u16, y: u16, now: Duration) -> bool {
        let page_y = y.saturating_add(self.viewport.scroll_y);
        match self.layout.buttons.iter().position(|r| r.contains(x, page_y)) {
            Some(index) => self.activate(index, now),
            None => false,
        }
    }

    /// Start a smooth scroll to the section button `index` links to.
    ///
    /// Returns false for unknown buttons, buttons without a target, or when
    /// the page already rests at the target.
    pub fn activate(&mut self, index: usize, now: Duration) -> bool {
        let Some(section) = self.content.buttons.get(index).and_then(|b| b.target) else {
            return false;
        };
        let Some(rect) = self.layout.sections.get(section) else {
            return false;
        };
        let to = rect.y.min(self.max_scroll());
        if to == self.viewport.scroll_y {
            self.scroll = None;
            return false;
        }
        debug!("landing: scrolling to section {section} (row {to})");
        self.scroll = Some(SmoothScroll::new(self.viewport.scroll_y, to, now));
        true
    }

    /// Scroll by `delta` rows, clamped to the page. Returns true if moved.
    ///
    /// Cancels any anchor scroll in progress.
    pub fn scroll_by(&mut self, delta: i32, now: Duration) -> bool {
        self.scroll = None;
        let target = (self.viewport.scroll_y as i32 + delta).clamp(0, self.max_scroll() as i32);
        if target as u16 == self.viewport.scroll_y {
            return false;
        }
        self.viewport.scroll_y = target as u16;
        self.check_reveal(now);
        true
    }

    pub fn resize(&mut self, width: u16, height: u16, now: Duration) -> Result<()> {
        self.scroll = None;
        self.viewport.width = width;
        self.viewport.height = height;
        self.relayout()?;
        self.check_reveal(now);
        Ok(())
    }

    /// How long the loop may sleep before the next scheduled change.
    pub fn next_wake(&self, now: Duration) -> Duration {
        let animating = matches!(self.overlay, OverlayPhase::Fading { .. })
            || self.scroll.is_some()
            || self.revealing
            || self.reveal.in_flight(now);
        let budget = if animating { FRAME_BUDGET } else { IDLE_BUDGET };

        [
            self.timer.remaining(now),
            self.gate_remaining(now),
            self.overlay_hides_in(now),
            self.caret_toggles_in(now),
            self.light.hides_in(now),
        ]
        .into_iter()
        .flatten()
        .fold(budget, Duration::min)
    }

    fn caret_toggles_in(&self, now: Duration) -> Option<Duration> {
        if self.started && self.effect(Effects::TYPEWRITER) {
            next_blink_toggle(self.config.caret_fps, now)
        } else {
            None
        }
    }

    fn overlay_hides_in(&self, now: Duration) -> Option<Duration> {
        if !self.effect(Effects::LOADING) {
            return None;
        }
        let hide = self.gate.ready_since()? + self.loading.hide_at;
        (now < hide).then(|| hide - now)
    }

    fn gate_remaining(&self, now: Duration) -> Option<Duration> {
        if self.gate.is_open() {
            None
        } else {
            self.gate.remaining(now)
        }
    }

    fn overlay_at(&self, now: Duration) -> OverlayPhase {
        if !self.effect(Effects::LOADING) {
            return OverlayPhase::Removed;
        }
        match self.gate.ready_since() {
            Some(since) => self.loading.phase_at(now.saturating_sub(since)),
            None => OverlayPhase::Visible,
        }
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Render the visible part of the page at `now`.
    pub fn compose(&self, now: Duration) -> FrameBuffer {
        let palette = self.config.palette;
        let Viewport {
            scroll_y,
            width,
            height,
        } = self.viewport;
        let top = scroll_y as i32;
        let mut frame = FrameBuffer::with_background(width, height, palette.background);

        // Background orbs
        for (index, orb) in self.orbs.iter().enumerate() {
            let cy = if self.effect(Effects::PARALLAX) {
                orb.shifted_y(scroll_y, index)
            } else {
                orb.y as i32
            } - top;
            let (cx, r) = (orb.x as f32, orb.radius as f32);
            frame.tint(palette.orb, palette.background, |x, y| {
                let dx = x as f32 - cx;
                let dy = (y as i32 - cy) as f32 * 2.0;
                (1.0 - (dx * dx + dy * dy).sqrt() / (r * 2.0)).max(0.0)
            });
        }

        // Hero
        let title = &self.content.title;
        let title_rect = self.layout.title;
        frame.draw_text(
            centered_start(title, title_rect.x, title_rect.width) as i32,
            title_rect.y as i32 - top,
            title,
            palette.text,
            Attr::BOLD,
        );

        let rotating = self.layout.rotating;
        let text = self.text.text();
        let shown = truncate_text(&text, rotating.width.saturating_sub(1));
        let line_width = string_width(shown) + string_width(CARET);
        let start = rotating.x + rotating.width.saturating_sub(line_width) / 2;
        let end = frame.draw_text(
            start as i32,
            rotating.y as i32 - top,
            shown,
            palette.accent,
            Attr::BOLD,
        );
        if self.started && self.effect(Effects::TYPEWRITER) && self.caret_visible {
            frame.draw_text(end, rotating.y as i32 - top, CARET, palette.accent, Attr::NONE);
        }

        // Buttons
        for (index, (rect, button)) in self
            .layout
            .buttons
            .iter()
            .zip(&self.content.buttons)
            .enumerate()
        {
            let (dx, dy) = self
                .magnetic
                .buttons()
                .get(index)
                .map(|b| b.cell_offset())
                .unwrap_or((0, 0));
            let (dx, dy) = (dx as i32, dy as i32 - top);
            let color = if index == 0 { palette.accent } else { palette.muted };
            frame.draw_border(*rect, dx, dy, color);
            frame.draw_text(
                rect.x as i32 + BUTTON_PADDING as i32 + dx,
                rect.y as i32 + 1 + dy,
                &button.label,
                palette.text,
                Attr::NONE,
            );
        }

        // Sections
        for (id, (rect, section)) in self
            .layout
            .sections
            .iter()
            .zip(&self.content.sections)
            .enumerate()
        {
            let (progress, shift) = if self.effect(Effects::SCROLL_REVEAL) {
                if !self.reveal.is_revealed(id) {
                    continue;
                }
                (self.reveal.progress_at(id, now), self.reveal.shift_at(id, now))
            } else {
                (1.0, 0)
            };
            let y = rect.y as i32 - top + shift;
            frame.draw_border(*rect, 0, shift - top, palette.muted);
            frame.draw_text(rect.x as i32 + 2, y + 1, &section.heading, palette.text, Attr::BOLD);
            for (line, body) in section.body.iter().enumerate() {
                frame.draw_text(
                    rect.x as i32 + 2,
                    y + 3 + line as i32,
                    body,
                    palette.muted,
                    Attr::NONE,
                );
            }
            frame.fade_text(
                rect.x as i32,
                y,
                rect.width,
                rect.height,
                palette.background,
                1.0 - progress,
            );
        }

        // Cursor light
        if self.light.is_visible() {
            frame.tint(palette.light, palette.background, |x, y| {
                self.light.intensity_at(x, y) * LIGHT_STRENGTH
            });
        }

        // Loading overlay
        match self.overlay_at(now) {
            OverlayPhase::Visible => draw_overlay(&mut frame, palette.overlay, palette.muted),
            OverlayPhase::Fading { progress } => {
                frame.tint(palette.overlay, palette.background, |_, _| 1.0 - progress);
            }
            OverlayPhase::Removed => {}
        }

        frame
    }

    // =========================================================================
    // State Query
    // =========================================================================

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Text currently shown by the typewriter.
    pub fn rotating_text(&self) -> String {
        self.text.text()
    }

    pub fn typewriter(&self) -> &Typewriter<R> {
        &self.typewriter
    }

    pub fn layout(&self) -> &LandingLayout {
        &self.layout
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Whether an anchor scroll is in progress.
    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_some()
    }

    pub fn reveal(&self) -> &RevealObserver {
        &self.reveal
    }

    pub fn light(&self) -> &CursorLight {
        &self.light
    }

    pub fn magnetic(&self) -> &MagneticGroup {
        &self.magnetic
    }
}

impl<R> Drop for LandingScreen<R> {
    fn drop(&mut self) {
        if let Some(stop) = self.stop_caret.take() {
            stop();
        }
    }
}

fn draw_overlay(frame: &mut FrameBuffer, bg: Rgba, fg: Rgba) {
    const LABEL: &str = "loading…";
    let (width, height) = (frame.width(), frame.height());
    frame.fill_rect(0, 0, width, height, bg);
    frame.draw_text(
        centered_start(LABEL, 0, width) as i32,
        height as i32 / 2,
        LABEL,
        fg,
        Attr::DIM,
    );
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typewriter::ScriptedSource;
    use spark_signals::signal;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn setup(config: LandingConfig) -> LandingScreen<ScriptedSource> {
        setup_with(LandingContent::default(), config)
    }

    fn setup_with(content: LandingContent, config: LandingConfig) -> LandingScreen<ScriptedSource> {
        crate::state::animate::reset_blink_registries();
        LandingScreen::new(
            content,
            config,
            ScriptedSource::new(vec![0]),
            signal(true),
            true,
            (80, 25),
        )
        .unwrap()
    }

    fn frame_contains(frame: &FrameBuffer, needle: &str) -> bool {
        (0..frame.height()).any(|y| frame.row_text(y).contains(needle))
    }

    #[test]
    fn test_effects_wait_for_gate() {
        let mut screen = setup(LandingConfig::default());
        screen.update(ms(0));
        screen.update(ms(2999));
        assert!(!screen.is_started());
        assert_eq!(screen.rotating_text(), "");

        assert!(screen.update(ms(3000)));
        assert!(screen.is_started());
        assert_eq!(screen.rotating_text().chars().count(), 1);
    }

    #[test]
    fn test_typing_follows_returned_delays() {
        let mut screen = setup(LandingConfig::default());
        screen.update(ms(0));
        screen.update(ms(3000));
        screen.update(ms(3079));
        assert_eq!(screen.rotating_text().chars().count(), 1);
        screen.update(ms(3080));
        assert_eq!(screen.rotating_text().chars().count(), 2);
        assert!(screen.typewriter().current_word().starts_with(&screen.rotating_text()));
    }

    #[test]
    fn test_overlay_then_title() {
        let mut screen = setup(LandingConfig::default());
        screen.update(ms(0));
        let frame = screen.compose(ms(0));
        assert!(frame_contains(&frame, "loading"));
        assert!(!frame_contains(&frame, "Your product"));

        screen.update(ms(3200));
        let frame = screen.compose(ms(3200));
        assert!(frame_contains(&frame, "Your product, spoken natively"));
    }

    #[test]
    fn test_pointer_ignored_before_start() {
        let mut screen = setup(LandingConfig::default());
        screen.update(ms(0));
        let moved = screen
            .handle(InputEvent::PointerMove { x: 10, y: 10 }, ms(100))
            .unwrap();
        assert!(!moved);
        assert!(!screen.light().is_visible());
    }

    #[test]
    fn test_magnetic_after_start() {
        let mut screen = setup(LandingConfig::default());
        screen.update(ms(0));
        screen.update(ms(3000));
        let rect = screen.layout().buttons[0];
        screen
            .handle(
                InputEvent::PointerMove {
                    x: rect.x + rect.width - 1,
                    y: rect.y + 1,
                },
                ms(3010),
            )
            .unwrap();
        assert!(screen.light().is_visible());
        assert!(screen.magnetic().buttons()[0].offset().0 > 0.0);

        screen.handle(InputEvent::PointerLeave, ms(3020)).unwrap();
        assert_eq!(screen.magnetic().buttons()[0].offset(), (0.0, 0.0));
    }

    #[test]
    fn test_scroll_reveals_sections() {
        let mut screen = setup(LandingConfig::default());
        screen.update(ms(0));
        screen.update(ms(3000));
        assert!(!screen.reveal().is_revealed(0));

        assert!(screen.scroll_by(10, ms(3000)));
        assert!(screen.reveal().is_revealed(0));
        assert!(!screen.reveal().is_revealed(2));

        screen.scroll_by(-10, ms(3000));
        assert!(screen.reveal().is_revealed(0));
    }

    #[test]
    fn test_scroll_clamps_to_page() {
        let mut screen = setup(LandingConfig::default());
        assert!(!screen.scroll_by(-5, ms(0)));
        screen.scroll_by(1000, ms(0));
        let max = screen.layout().page_height - 25;
        assert_eq!(screen.viewport().scroll_y, max);
        assert!(!screen.scroll_by(1, ms(0)));
    }

    #[test]
    fn test_disabled_typewriter_stays_empty() {
        let mut config = LandingConfig::default();
        config.effects.remove(Effects::TYPEWRITER);
        let mut screen = setup(config);
        screen.update(ms(0));
        screen.update(ms(3000));
        screen.update(ms(5000));
        assert!(screen.is_started());
        assert_eq!(screen.rotating_text(), "");
    }

    #[test]
    fn test_next_wake() {
        crate::state::animate::reset_blink_registries();
        let ready = signal(false);
        let mut screen = LandingScreen::new(
            LandingContent::default(),
            LandingConfig::default(),
            ScriptedSource::new(vec![0]),
            ready.clone(),
            true,
            (80, 25),
        )
        .unwrap();
        screen.update(ms(0));
        assert_eq!(screen.next_wake(ms(0)), IDLE_BUDGET);

        ready.set(true);
        screen.update(ms(100));
        assert_eq!(screen.next_wake(ms(100)), IDLE_BUDGET);
        assert_eq!(screen.next_wake(ms(3050)), ms(50));

        screen.update(ms(3100));
        assert!(screen.next_wake(ms(3100)) <= FRAME_BUDGET);
    }

    #[test]
    fn test_resize_relayouts() {
        let mut screen = setup(LandingConfig::default());
        screen.handle(InputEvent::Resize(100, 30), ms(0)).unwrap();
        assert_eq!(screen.layout().hero.width, 100);
        assert_eq!(screen.compose(ms(0)).width(), 100);
    }

    #[test]
    fn test_sleeps_through_dwell() {
        let content = LandingContent {
            words: crate::typewriter::WordList::new(["Go", "Rust"]).unwrap(),
            ..LandingContent::default()
        };
        let mut screen = setup_with(content, LandingConfig::default());
        for at in [0, 3000, 3080, 3160, 3240, 3300] {
            screen.update(ms(at));
        }
        assert_eq!(screen.rotating_text(), "Rust");
        // Next tick is 1540ms away; only the caret needs a frame sooner
        assert_eq!(screen.next_wake(ms(3300)), ms(200));
    }

    #[test]
    fn test_activate_scrolls_smoothly() {
        let mut screen = setup(LandingConfig::default());
        screen.update(ms(0));
        screen.update(ms(3000));
        let target = screen.layout().sections[2]
            .y
            .min(screen.layout().page_height - 25);

        assert!(screen.handle(InputEvent::Activate(0), ms(3000)).unwrap());
        assert!(screen.is_scrolling());
        assert_eq!(screen.next_wake(ms(3000)), FRAME_BUDGET);

        screen.update(ms(3250));
        let mid = screen.viewport().scroll_y;
        assert!(mid > 0 && mid < target, "mid-scroll offset {mid}");

        screen.update(ms(3500));
        assert_eq!(screen.viewport().scroll_y, target);
        assert!(!screen.is_scrolling());
        assert!(screen.reveal().is_revealed(0));
    }

    #[test]
    fn test_click_on_button_activates() {
        let mut screen = setup(LandingConfig::default());
        screen.update(ms(0));
        screen.update(ms(3000));
        let rect = screen.layout().buttons[1];
        let target = screen.layout().sections[0]
            .y
            .min(screen.layout().page_height - 25);

        let clicked = screen
            .handle(
                InputEvent::Click {
                    x: rect.x + 1,
                    y: rect.y + 1,
                },
                ms(3000),
            )
            .unwrap();
        assert!(clicked);
        screen.update(ms(4000));
        assert_eq!(screen.viewport().scroll_y, target);

        let missed = screen
            .handle(InputEvent::Click { x: 0, y: 0 }, ms(4000))
            .unwrap();
        assert!(!missed);
    }

    #[test]
    fn test_manual_scroll_cancels_anchor_scroll() {
        let mut screen = setup(LandingConfig::default());
        screen.update(ms(0));
        screen.update(ms(3000));
        assert!(screen.activate(0, ms(3000)));
        screen.scroll_by(-1, ms(3010));
        assert!(!screen.is_scrolling());
        screen.update(ms(3500));
        assert_eq!(screen.viewport().scroll_y, 0);

        assert!(!screen.activate(5, ms(3500)));
    }

    #[test]
    fn test_section_fades_and_slides_in() {
        let mut config = LandingConfig::default();
        config.effects.remove(Effects::TYPEWRITER);
        let palette = config.palette;
        let mut screen = setup(config);
        screen.update(ms(0));
        screen.update(ms(3000));
        screen.scroll_by(10, ms(3000));
        assert!(screen.reveal().is_revealed(0));

        let rect = screen.layout().sections[0];
        let x = rect.x + 2;
        let heading_row = rect.y - 10 + 1;

        // Starts two rows low, in the background color
        let frame = screen.compose(ms(3000));
        assert!(frame.row_text(heading_row + 2).contains("Translate once"));
        assert_eq!(frame.get(x, heading_row + 2).unwrap().fg, palette.background);

        // Mid-transition: partly faded in
        screen.update(ms(3400));
        assert_eq!(screen.next_wake(ms(3400)), FRAME_BUDGET);
        let frame = screen.compose(ms(3400));
        let fg = frame.get(x, heading_row).unwrap().fg;
        assert_ne!(fg, palette.background);
        assert_ne!(fg, palette.text);

        // Settled
        assert!(screen.update(ms(3800)));
        let frame = screen.compose(ms(3800));
        assert!(frame.row_text(heading_row).contains("Translate once"));
        assert_eq!(frame.get(x, heading_row).unwrap().fg, palette.text);
        assert_eq!(screen.next_wake(ms(3800)), IDLE_BUDGET);
    }
}
