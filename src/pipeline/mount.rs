//! Mount API - terminal lifecycle and the event loop.
//!
//! # Example
//!
//! ```ignore
//! use spark_landing::pipeline::{mount, LandingConfig, LandingContent};
//!
//! // Blocking: mount, loop until Ctrl+C / q / Esc, restore the terminal
//! mount::run(LandingConfig::default(), LandingContent::default())?;
//!
//! // Or drive the loop yourself
//! let mut handle = mount::mount()?;
//! while mount::step(&mut screen, handle.renderer(), event, clock.now())? {
//!     // ...
//! }
//! handle.unmount()?;
//! ```

use std::io::{self, Write};
use std::time::Duration;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::{info, warn};

use super::content::{LandingConfig, LandingContent};
use super::scene::LandingScreen;
use super::terminal::{detect_terminal_size, set_terminal_size, terminal_size};
use crate::error::Result;
use crate::renderer::DiffRenderer;
use crate::state::input::poll_event;
use crate::state::{mark_ready, ready_signal, Clock, InputEvent, SystemClock};
use crate::typewriter::{RandomSource, RngSource};

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by [`mount`]. Restores the terminal on unmount or drop.
pub struct MountHandle {
    renderer: DiffRenderer<io::Stdout>,
    mounted: bool,
}

impl MountHandle {
    pub fn renderer(&mut self) -> &mut DiffRenderer<io::Stdout> {
        &mut self.renderer
    }

    /// Leave the alternate screen and raw mode.
    pub fn unmount(mut self) -> Result<()> {
        self.restore()
    }

    fn restore(&mut self) -> Result<()> {
        if !self.mounted {
            return Ok(());
        }
        self.mounted = false;
        self.renderer.exit_fullscreen()?;
        disable_raw_mode()?;
        info!("unmounted");
        Ok(())
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        // Best effort
        if let Err(err) = self.restore() {
            warn!("failed to restore terminal: {err}");
        }
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Take over the terminal: raw mode, alternate screen, mouse capture.
///
/// Also detects the terminal size and raises the ready signal, which starts
/// the intro countdown of any screen built on [`ready_signal`].
pub fn mount() -> Result<MountHandle> {
    detect_terminal_size();

    enable_raw_mode()?;
    let mut renderer = DiffRenderer::stdout();
    if let Err(err) = renderer.enter_fullscreen(true) {
        let _ = disable_raw_mode();
        return Err(err.into());
    }

    let (width, height) = terminal_size();
    info!("mounted on {width}x{height} terminal");
    mark_ready();

    Ok(MountHandle {
        renderer,
        mounted: true,
    })
}

// =============================================================================
// Event Loop
// =============================================================================

/// Apply one optional event, advance the screen to `now` and render if the
/// frame changed.
///
/// Returns `Ok(false)` once a quit was requested.
pub fn step<R: RandomSource, W: Write>(
    screen: &mut LandingScreen<R>,
    renderer: &mut DiffRenderer<W>,
    event: Option<InputEvent>,
    now: Duration,
) -> Result<bool> {
    let mut dirty = false;

    match event {
        Some(InputEvent::Quit) => return Ok(false),
        Some(event) => {
            if let InputEvent::Resize(width, height) = event {
                set_terminal_size(width, height);
                renderer.invalidate();
            }
            dirty |= screen.handle(event, now)?;
        }
        None => {}
    }

    dirty |= screen.update(now);

    if dirty || !renderer.has_previous() {
        renderer.render(&screen.compose(now))?;
    }
    Ok(true)
}

/// Mount, run the landing screen until quit, and restore the terminal.
pub fn run(config: LandingConfig, content: LandingContent) -> Result<()> {
    let mut handle = mount()?;
    let clock = SystemClock::new();

    let mut screen = LandingScreen::new(
        content,
        config,
        RngSource::from_entropy(),
        ready_signal(),
        true,
        terminal_size(),
    )?;

    let mut event = None;
    while step(&mut screen, handle.renderer(), event.take(), clock.now())? {
        event = poll_event(screen.next_wake(clock.now()))?;
    }

    handle.unmount()
}

// =============================================================================
// Tests
// =============================================================================
