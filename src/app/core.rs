use std::time::Instant;

use crate::app::carousel::{Carousel, CarouselConfig};
use crate::app::settings::Settings;
use crate::content::Profile;

/// Top-level application state: the immutable content catalog plus the two
/// pieces of mutable UI state (theme flag, carousel index). Each piece has
/// exactly one owner and one mutator; widgets only read.
pub struct App {
    pub profile: Profile,
    pub carousel: Carousel,
    pub dark_mode: bool,
    pub settings: Settings,
}

impl App {
    /// Build the app from loaded content and settings. Derives the runtime
    /// style table for the starting theme.
    pub fn new(profile: Profile, settings: Settings, now: Instant) -> Self {
        let cfg = CarouselConfig {
            interval: settings.autoplay_interval(),
            transition: settings.transition(),
            autoplay: settings.autoplay,
        };
        let carousel = Carousel::new(profile.projects.len(), cfg, now);
        let dark_mode = settings.theme == "dark";
        crate::ui::colors::set_dark_mode(dark_mode);
        App { profile, carousel, dark_mode, settings }
    }

    /// Flip the theme flag and re-derive the style table. Every widget
    /// reads styles through `ui::colors::current`, so the next draw picks
    /// up the alternate token set uniformly.
    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        crate::ui::colors::set_dark_mode(self.dark_mode);
    }

    /// Link carried by the currently active slide, if any.
    pub fn active_link(&self) -> Option<&str> {
        if self.carousel.is_empty() {
            return None;
        }
        self.profile
            .projects
            .get(self.carousel.index())
            .and_then(|p| p.link.as_deref())
    }
}
