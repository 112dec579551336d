//! State Module - runtime state behind the landing screen
//!
//! - **Clock** - time sources and the self-rescheduling timer slot
//! - **Lifecycle** - the ready signal and delayed starts
//! - **Animate** - clock-driven caret blink
//! - **Input** - crossterm event conversion

pub mod animate;
pub mod clock;
pub mod input;
pub mod lifecycle;

pub use clock::{Clock, ManualClock, SystemClock, TimerSlot};
pub use input::InputEvent;
pub use lifecycle::{is_ready, mark_ready, ready_signal, reset_lifecycle, start_after, StartGate};
