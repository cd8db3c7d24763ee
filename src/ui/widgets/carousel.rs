use std::time::Instant;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;

/// Projects section: renders exactly one slide as active, plus indicator
/// dots. With no projects the section is an empty region — nothing is
/// drawn and nothing can fail.
pub fn render(f: &mut Frame, area: Rect, app: &App, now: Instant) {
    if app.carousel.is_empty() {
        return;
    }
    let colors = crate::ui::colors::current();
    let index = app.carousel.index();
    let total = app.carousel.len();
    let project = &app.profile.projects[index];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Projects ({}/{}) ", index + 1, total))
        .title_style(colors.section_title_style)
        .style(colors.page_style);
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    // image box (placeholder frame), name, description, link, dots
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Min(2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    // The terminal has no image decoder; show the reference in a frame the
    // way a browser would show its broken-image fallback.
    let image = Paragraph::new(format!("[ {} ]", project.image))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).style(colors.slide_block_style));
    f.render_widget(image, rows[0]);

    // Dim the title for the duration of a slide transition.
    let name_style = if app.carousel.in_transition(now) {
        colors.dot_style
    } else {
        colors.slide_active_style
    };
    let name = Paragraph::new(project.name.clone())
        .alignment(Alignment::Center)
        .style(name_style);
    f.render_widget(name, rows[1]);

    let width = inner.width.saturating_sub(2).max(1) as usize;
    let desc_lines: Vec<Line> = textwrap::wrap(&project.description, width)
        .into_iter()
        .map(|l| Line::styled(l.into_owned(), colors.text_style))
        .collect();
    let desc = Paragraph::new(desc_lines).alignment(Alignment::Center);
    f.render_widget(desc, rows[2]);

    if let Some(link) = &project.link {
        let l = Paragraph::new(format!("{}  [Enter]", link))
            .alignment(Alignment::Center)
            .style(colors.link_style);
        f.render_widget(l, rows[3]);
    }

    let dots: Vec<Span> = (0..total)
        .map(|i| {
            if i == index {
                Span::styled("\u{25cf} ", colors.dot_active_style)
            } else {
                Span::styled("\u{25cb} ", colors.dot_style)
            }
        })
        .collect();
    let dots = Paragraph::new(Line::from(dots)).alignment(Alignment::Center);
    f.render_widget(dots, rows[4]);
}
