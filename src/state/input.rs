//! Input Module - crossterm event conversion
//!
//! Bridges crossterm's event system with the landing screen. Only the few
//! inputs the landing screen cares about survive conversion: pointer moves
//! and clicks, scroll, button activation, resize and quit keys.
//!
//! # Example
//!
//! ```ignore
//! use spark_landing::state::input::{poll_event, InputEvent};
//!
//! if let Some(event) = poll_event(Duration::from_millis(16))? {
//!     screen.handle(event, clock.now());
//! }
//! ```

use std::time::Duration;

use crossterm::event::{
    poll, read, Event as CrosstermEvent, KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent as CrosstermMouseEvent, MouseEventKind,
};

/// Rows per mouse wheel notch.
pub const WHEEL_SCROLL: i32 = 3;

/// Rows per Page Up/Down.
pub const PAGE_SCROLL: i32 = 10;

// =============================================================================
// INPUT EVENT ENUM
// =============================================================================

/// Events the landing screen reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer moved (or dragged) to a cell.
    PointerMove { x: u16, y: u16 },
    /// Left click at a cell.
    Click { x: u16, y: u16 },
    /// Pointer left the screen (focus lost).
    PointerLeave,
    /// Activate the button at this index (Enter = 0, `1`-`9`).
    Activate(usize),
    /// Scroll by a signed number of rows; positive scrolls down.
    Scroll(i32),
    /// Terminal resized (new width, height).
    Resize(u16, u16),
    /// Ctrl+C, `q` or Esc.
    Quit,
    /// Anything else.
    None,
}

// =============================================================================
// CONVERSION
// =============================================================================

pub fn convert_mouse_event(event: CrosstermMouseEvent) -> InputEvent {
    match event.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => InputEvent::PointerMove {
            x: event.column,
            y: event.row,
        },
        MouseEventKind::Down(MouseButton::Left) => InputEvent::Click {
            x: event.column,
            y: event.row,
        },
        MouseEventKind::ScrollDown => InputEvent::Scroll(WHEEL_SCROLL),
        MouseEventKind::ScrollUp => InputEvent::Scroll(-WHEEL_SCROLL),
        _ => InputEvent::None,
    }
}

pub fn convert_key_event(event: CrosstermKeyEvent) -> InputEvent {
    if event.kind == KeyEventKind::Release {
        return InputEvent::None;
    }
    match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => InputEvent::Quit,
        KeyCode::Char('q') | KeyCode::Esc => InputEvent::Quit,
        KeyCode::Down | KeyCode::Char('j') => InputEvent::Scroll(1),
        KeyCode::Up | KeyCode::Char('k') => InputEvent::Scroll(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => InputEvent::Scroll(PAGE_SCROLL),
        KeyCode::PageUp => InputEvent::Scroll(-PAGE_SCROLL),
        KeyCode::Enter => InputEvent::Activate(0),
        KeyCode::Char(digit @ '1'..='9') => InputEvent::Activate(digit as usize - '1' as usize),
        _ => InputEvent::None,
    }
}

pub fn convert_event(event: CrosstermEvent) -> InputEvent {
    match event {
        CrosstermEvent::Mouse(mouse) => convert_mouse_event(mouse),
        CrosstermEvent::Key(key) => convert_key_event(key),
        CrosstermEvent::Resize(width, height) => InputEvent::Resize(width, height),
        CrosstermEvent::FocusLost => InputEvent::PointerLeave,
        _ => InputEvent::None,
    }
}

// =============================================================================
// POLLING
// =============================================================================

/// Wait up to `timeout` for one event.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<InputEvent>> {
    if poll(timeout)? {
        Ok(Some(convert_event(read()?)))
    } else {
        Ok(None)
    }
}

// =============================================================================
// TESTS
// =============================================================================
