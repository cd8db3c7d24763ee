use std::time::Instant;

use crate::app::settings::keybinds;
use crate::app::App;
use crate::input::KeyCode;
use crate::runner::commands;

/// Top-level key handler. Returns `Ok(true)` when the app should quit.
///
/// Manual carousel navigation goes through the same state machine methods
/// the autoplay timer uses, so the dwell resets but the timer keeps
/// running from the new index.
pub fn handle_key(app: &mut App, code: KeyCode, now: Instant) -> anyhow::Result<bool> {
    if keybinds::is_quit(&code) {
        return Ok(true);
    }
    if keybinds::is_theme_toggle(&code) {
        app.toggle_theme();
    } else if keybinds::is_next_slide(&code) {
        app.carousel.next(now);
    } else if keybinds::is_prev_slide(&code) {
        app.carousel.prev(now);
    } else if let Some(target) = keybinds::jump_target(&code) {
        app.carousel.jump(target, now);
    } else if keybinds::is_open_link(&code) {
        // Slides without a link are plain static content; Enter is a no-op.
        commands::execute_command(app, "open-link")?;
    } else if keybinds::is_open_resume(&code) {
        commands::execute_command(app, "open-resume")?;
    }
    Ok(false)
}
