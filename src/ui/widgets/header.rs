use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::content::Profile;

/// Header section: name, title, and the resume reference.
pub fn render(f: &mut Frame, area: Rect, profile: &Profile) {
    let colors = crate::ui::colors::current();
    let lines = vec![
        Line::styled(profile.name.clone(), colors.header_name_style),
        Line::styled(profile.title.clone(), colors.header_title_style),
        Line::styled(format!("Resume: {}  [r]", profile.resume), colors.link_style),
    ];
    let p = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).style(colors.page_style));
    f.render_widget(p, area);
}
