// Centralised keybind predicates for the application.
//
// Small, well-named helpers like `is_quit` and `is_next_slide` so handlers
// refer to actions rather than raw `KeyCode` patterns. Kept as plain
// functions so they can later be wired to user-configurable settings
// without touching the handlers.

use crate::input::KeyCode;

pub fn is_quit(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Esc)
}

pub fn is_next_slide(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Right | KeyCode::Char('l'))
}

pub fn is_prev_slide(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Left | KeyCode::Char('h'))
}

pub fn is_theme_toggle(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('t'))
}

pub fn is_open_link(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Enter | KeyCode::Char('o'))
}

pub fn is_open_resume(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('r'))
}

/// Digit keys 1..=9 jump straight to a slide; returns the zero-based
/// target index.
pub fn jump_target(code: &KeyCode) -> Option<usize> {
    match code {
        KeyCode::Char(c) if c.is_ascii_digit() && *c != '0' => {
            Some(*c as usize - '1' as usize)
        }
        _ => None,
    }
}
