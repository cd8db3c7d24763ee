use std::time::{Duration, Instant};

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::app::settings::Settings;
use crate::app::App;
use crate::content::Profile;
use crate::input::{poll, read_event, InputEvent};
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, restore_terminal};
use crate::ui;

/// Upper bound on the poll timeout so resizes and input stay responsive
/// even with a long autoplay dwell.
const TICK_CAP: Duration = Duration::from_millis(100);

pub fn run_app(profile: Profile, settings: Settings) -> anyhow::Result<()> {
    let mut terminal = init_terminal()?;
    let result = run_loop(&mut terminal, profile, settings);
    // Always restore the terminal, even when the loop errored.
    restore_terminal(terminal)?;
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    profile: Profile,
    settings: Settings,
) -> anyhow::Result<()> {
    let mut app = App::new(profile, settings, Instant::now());
    tracing::info!(
        projects = app.carousel.len(),
        autoplay = app.carousel.autoplay_scheduled(),
        "starting event loop"
    );

    // Main event loop. Input and the autoplay timer are cooperative on
    // this one thread: the poll timeout shrinks to the carousel's next
    // fire time, and whichever event lands first mutates state first.
    loop {
        let now = Instant::now();
        terminal.draw(|f| ui::draw(f, &app, now))?;

        let timeout = app
            .carousel
            .time_until_fire(now)
            .map_or(TICK_CAP, |d| d.min(TICK_CAP));

        if poll(timeout)? {
            match read_event()? {
                InputEvent::Key(key) => {
                    if handlers::handle_key(&mut app, key.code, Instant::now())? {
                        break;
                    }
                }
                InputEvent::Resize(_, _) => { /* redraw on next loop */ }
                InputEvent::Other => {}
            }
        }

        app.carousel.tick(Instant::now());
    }

    // Teardown: cancel the pending autoplay before the terminal goes away
    // so no tick can act on a torn-down view.
    app.carousel.cancel();
    Ok(())
}
