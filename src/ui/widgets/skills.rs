use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

use crate::content::SkillEntry;

/// Width of the name column to the left of each bar.
const LABEL_WIDTH: u16 = 12;

/// Pure mapping from skill entries to (label, ratio) bar descriptors over
/// the fixed 0..=100 domain. Ratios are clamped so malformed levels
/// degrade instead of panicking the gauge.
pub fn ratios(skills: &[SkillEntry]) -> Vec<(String, f64)> {
    skills
        .iter()
        .map(|s| (s.name.clone(), (f64::from(s.level) / 100.0).clamp(0.0, 1.0)))
        .collect()
}

/// Skills section: one horizontal bar per entry, length proportional to
/// level. An empty skill list renders an empty chart.
pub fn render(f: &mut Frame, area: Rect, skills: &[SkillEntry]) {
    let colors = crate::ui::colors::current();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Skills ")
        .title_style(colors.section_title_style)
        .style(colors.page_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let bars = ratios(skills);
    if bars.is_empty() || inner.height == 0 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); bars.len()])
        .split(inner);

    for (row, (name, ratio)) in rows.iter().zip(bars) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(LABEL_WIDTH), Constraint::Min(0)])
            .split(*row);
        let label = Paragraph::new(name).style(colors.bar_label_style);
        f.render_widget(label, cols[0]);
        let pct = (ratio * 100.0).round() as u16;
        let gauge = Gauge::default()
            .gauge_style(colors.bar_style)
            .ratio(ratio)
            .label(format!("{}%", pct));
        f.render_widget(gauge, cols[1]);
    }
}
