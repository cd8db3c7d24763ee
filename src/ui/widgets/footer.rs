use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Bottom help bar.
pub fn render(f: &mut Frame, area: Rect) {
    let colors = crate::ui::colors::current();
    let p = Paragraph::new(
        "\u{2190}/\u{2192}:slides  1-9:jump  t:theme  Enter:open link  r:resume  q:quit",
    )
    .style(colors.footer_style);
    f.render_widget(p, area);
}
