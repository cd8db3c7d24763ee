use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::content::Contact;

/// Contact section: email/phone plus external profile links. Plain text;
/// the links are informational, not navigable.
pub fn render(f: &mut Frame, area: Rect, contact: &Contact) {
    let colors = crate::ui::colors::current();
    let lines = vec![
        contact_line("Email", &contact.email),
        contact_line("Phone", &contact.phone),
        contact_line("GitHub", &contact.github),
        contact_line("LinkedIn", &contact.linkedin),
        contact_line("StackOverflow", &contact.stackoverflow),
    ];
    let p = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Contact ")
            .title_style(colors.section_title_style)
            .style(colors.page_style),
    );
    f.render_widget(p, area);
}

fn contact_line(label: &str, value: &str) -> Line<'static> {
    let colors = crate::ui::colors::current();
    Line::from(vec![
        Span::styled(format!("{}: ", label), colors.text_style),
        Span::styled(value.to_string(), colors.link_style),
    ])
}
