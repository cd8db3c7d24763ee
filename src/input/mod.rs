//! Thin wrapper over crossterm's event API so the runner and tests work
//! with a small app-level event type.

pub mod keyboard;

pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

/// Events the runner cares about.
pub enum InputEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Other,
}

/// Poll for input with a timeout; the timeout doubles as the carousel's
/// autoplay tick granularity.
pub fn poll(timeout: Duration) -> std::io::Result<bool> {
    event::poll(timeout)
}

/// Read the next terminal event, mapping it to an `InputEvent`. Key
/// releases/repeats are folded into `Other` so handlers only see presses.
pub fn read_event() -> std::io::Result<InputEvent> {
    Ok(match event::read()? {
        Event::Key(k) if k.kind == KeyEventKind::Press => InputEvent::Key(k),
        Event::Resize(w, h) => InputEvent::Resize(w, h),
        _ => InputEvent::Other,
    })
}
