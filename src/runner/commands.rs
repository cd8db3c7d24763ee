//! Named app commands plus the external link opener.

use std::process::{Command, Stdio};
use std::time::Instant;

use crate::app::App;

/// Execute a named command against the app. Returns `Ok(true)` when the
/// name matched a known command. Kept string-addressed so keybinds can
/// later be remapped through settings without touching this table.
pub fn execute_command(app: &mut App, name: &str) -> anyhow::Result<bool> {
    let now = Instant::now();
    match name {
        "next-slide" => app.carousel.next(now),
        "prev-slide" => app.carousel.prev(now),
        "toggle-theme" => app.toggle_theme(),
        "open-link" => {
            if let Some(url) = app.active_link().map(str::to_string) {
                open_link(&url);
            }
        }
        "open-resume" => {
            let resume = app.profile.resume.clone();
            open_link(&resume);
        }
        _ => return Ok(false),
    }
    Ok(true)
}

#[cfg(target_os = "macos")]
const OPENER: &str = "open";
#[cfg(target_os = "windows")]
const OPENER: &str = "explorer";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPENER: &str = "xdg-open";

/// Open a URI in a new browsing context via the platform opener. The
/// child is detached and failures are logged, never fatal: a dead link
/// must not take the page down.
pub fn open_link(url: &str) {
    tracing::info!("opening link: {}", url);
    let spawned = Command::new(OPENER)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
    if let Err(e) = spawned {
        tracing::error!("failed to open {}: {:#?}", url, e);
    }
}
