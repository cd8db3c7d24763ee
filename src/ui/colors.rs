use once_cell::sync::Lazy;
use ratatui::style::{Modifier, Style};
use std::sync::Mutex;

use crate::ui::Theme;

/// The runtime style token set. Derived once per theme change and read by
/// every widget, so a single toggle restyles the whole page uniformly.
#[derive(Clone, Debug, PartialEq)]
pub struct Colors {
    pub page_style: Style,
    pub header_name_style: Style,
    pub header_title_style: Style,
    pub section_title_style: Style,
    pub text_style: Style,
    pub bar_style: Style,
    pub bar_label_style: Style,
    pub slide_block_style: Style,
    pub slide_active_style: Style,
    pub dot_style: Style,
    pub dot_active_style: Style,
    pub link_style: Style,
    pub footer_style: Style,
}

static CURRENT: Lazy<Mutex<Colors>> = Lazy::new(|| Mutex::new(derive(&Theme::light())));

/// Derive concrete runtime Styles from the provided Theme and store them.
pub fn set_from_theme(theme: &Theme) {
    let mut g = CURRENT.lock().unwrap();
    *g = derive(theme);
}

/// Convenience for the app's boolean theme flag.
pub fn set_dark_mode(dark: bool) {
    let theme = if dark { Theme::dark() } else { Theme::light() };
    set_from_theme(&theme);
}

/// Snapshot of the current style token set.
pub fn current() -> Colors {
    CURRENT.lock().unwrap().clone()
}

fn derive(theme: &Theme) -> Colors {
    let base = theme.style_fg();
    let accent = Style::default().fg(theme.accent).bg(theme.bg);
    Colors {
        page_style: base,
        header_name_style: accent.add_modifier(Modifier::BOLD),
        header_title_style: base.add_modifier(Modifier::ITALIC),
        section_title_style: accent.add_modifier(Modifier::BOLD),
        text_style: base,
        bar_style: accent,
        bar_label_style: base,
        slide_block_style: base,
        slide_active_style: base.add_modifier(Modifier::BOLD),
        dot_style: base.add_modifier(Modifier::DIM),
        dot_active_style: accent.add_modifier(Modifier::BOLD),
        link_style: accent.add_modifier(Modifier::UNDERLINED),
        footer_style: base.add_modifier(Modifier::DIM),
    }
}
