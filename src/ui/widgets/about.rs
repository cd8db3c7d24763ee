use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// About section: the biography paragraph, word-wrapped to the area.
pub fn render(f: &mut Frame, area: Rect, about: &str) {
    let colors = crate::ui::colors::current();
    let p = Paragraph::new(about.to_string())
        .wrap(Wrap { trim: true })
        .style(colors.text_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" About ")
                .title_style(colors.section_title_style)
                .style(colors.page_style),
        );
    f.render_widget(p, area);
}
