use std::time::Instant;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::app::App;

pub mod colors;
pub mod themes;
pub mod widgets;

pub use themes::Theme;

/// Compose the whole page: header, about, skills chart, project carousel,
/// contact block, help footer. Pure function of app state; all mutation
/// happens in the handlers, so this is testable with a `TestBackend`.
pub fn draw(f: &mut Frame, app: &App, now: Instant) {
    let styles = colors::current();

    // paint the page background first so theme changes cover everything
    f.render_widget(Block::default().style(styles.page_style), f.area());

    let skills_height = (app.profile.skills.len() as u16).saturating_add(2);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(6),
            Constraint::Length(skills_height),
            Constraint::Min(12),
            Constraint::Length(7),
            Constraint::Length(1),
        ])
        .split(f.area());

    widgets::header::render(f, chunks[0], &app.profile);
    widgets::about::render(f, chunks[1], &app.profile.about);
    widgets::skills::render(f, chunks[2], &app.profile.skills);
    widgets::carousel::render(f, chunks[3], app, now);
    widgets::contact::render(f, chunks[4], &app.profile.contact);
    widgets::footer::render(f, chunks[5]);
}
