//! Project carousel state machine.
//!
//! The carousel owns a single index into the project list and advances it
//! three ways: an autoplay timer, manual next/previous navigation, and a
//! direct jump (indicator dots). All index arithmetic wraps modulo the
//! slide count, so the index is always valid while any slides exist.
//!
//! Time is passed in explicitly (`Instant` arguments) rather than read
//! inside the methods, so every transition is testable without sleeping.

use std::time::{Duration, Instant};

/// Timing knobs for the carousel, sourced from `Settings` rather than
/// hardcoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Dwell between automatic advances.
    pub interval: Duration,
    /// How long a slide counts as "in transition" after the index changes.
    pub transition: Duration,
    /// Whether the autoplay timer runs at all.
    pub autoplay: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        CarouselConfig {
            interval: Duration::from_millis(3000),
            transition: Duration::from_millis(500),
            autoplay: true,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Autoplay {
    interval: Duration,
    next_fire: Instant,
}

/// The carousel state: current slide plus the pending autoplay schedule.
#[derive(Clone, Debug)]
pub struct Carousel {
    len: usize,
    index: usize,
    transition: Duration,
    transition_until: Option<Instant>,
    autoplay: Option<Autoplay>,
}

impl Carousel {
    /// Create a carousel over `len` slides starting at index 0.
    ///
    /// With zero slides no timer is ever scheduled; ticks become no-ops
    /// and the widget renders an empty region.
    pub fn new(len: usize, cfg: CarouselConfig, now: Instant) -> Self {
        let autoplay = if cfg.autoplay && len > 0 {
            Some(Autoplay { interval: cfg.interval, next_fire: now + cfg.interval })
        } else {
            None
        };
        Carousel {
            len,
            index: 0,
            transition: cfg.transition,
            transition_until: None,
            autoplay,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current slide index. Only meaningful when `len > 0`.
    pub fn index(&self) -> usize {
        self.index
    }

    /// True while the most recent index change is still animating.
    pub fn in_transition(&self, now: Instant) -> bool {
        self.transition_until.is_some_and(|t| now < t)
    }

    /// Whether an autoplay fire is currently scheduled.
    pub fn autoplay_scheduled(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Time remaining until the next autoplay fire, for use as the event
    /// loop's poll timeout. `None` when no timer is scheduled.
    pub fn time_until_fire(&self, now: Instant) -> Option<Duration> {
        self.autoplay.map(|a| a.next_fire.saturating_duration_since(now))
    }

    /// Advance on the autoplay timer if it is due. Returns true when the
    /// index moved forward (including a wrap back to 0).
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(a) = self.autoplay.as_mut() else { return false };
        if now < a.next_fire {
            return false;
        }
        a.next_fire = now + a.interval;
        self.advance(1, now);
        true
    }

    /// Manual navigation: next slide. Resets the autoplay dwell so the
    /// timer continues from the new index; it is never disabled by this.
    pub fn next(&mut self, now: Instant) {
        if self.len == 0 {
            return;
        }
        self.advance(1, now);
        self.reset_dwell(now);
    }

    /// Manual navigation: previous slide, wrapping at the front.
    pub fn prev(&mut self, now: Instant) {
        if self.len == 0 {
            return;
        }
        self.advance(self.len - 1, now);
        self.reset_dwell(now);
    }

    /// Direct jump to `target` (indicator dots). Out-of-range targets are
    /// ignored.
    pub fn jump(&mut self, target: usize, now: Instant) {
        if target >= self.len || target == self.index {
            return;
        }
        self.index = target;
        self.transition_until = Some(now + self.transition);
        self.reset_dwell(now);
    }

    /// Teardown: drop the pending autoplay schedule. After this no tick
    /// can mutate the carousel.
    pub fn cancel(&mut self) {
        self.autoplay = None;
    }

    fn advance(&mut self, by: usize, now: Instant) {
        let old = self.index;
        self.index = (self.index + by) % self.len;
        // A single slide wraps onto itself; no visible transition then.
        if self.index != old {
            self.transition_until = Some(now + self.transition);
        }
    }

    fn reset_dwell(&mut self, now: Instant) {
        if let Some(a) = self.autoplay.as_mut() {
            a.next_fire = now + a.interval;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> CarouselConfig {
        CarouselConfig {
            interval: Duration::from_millis(100),
            transition: Duration::from_millis(20),
            autoplay: true,
        }
    }

    #[test]
    fn tick_before_deadline_does_not_advance() {
        let t0 = Instant::now();
        let mut c = Carousel::new(3, cfg(), t0);
        assert!(!c.tick(t0 + Duration::from_millis(50)));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn tick_at_deadline_advances_and_reschedules() {
        let t0 = Instant::now();
        let mut c = Carousel::new(3, cfg(), t0);
        assert!(c.tick(t0 + Duration::from_millis(100)));
        assert_eq!(c.index(), 1);
        // next fire is one interval after the tick that fired
        let rem = c.time_until_fire(t0 + Duration::from_millis(150)).unwrap();
        assert_eq!(rem, Duration::from_millis(50));
    }

    #[test]
    fn transition_window_tracks_index_changes() {
        let t0 = Instant::now();
        let mut c = Carousel::new(3, cfg(), t0);
        c.next(t0);
        assert!(c.in_transition(t0 + Duration::from_millis(10)));
        assert!(!c.in_transition(t0 + Duration::from_millis(25)));
    }

    #[test]
    fn single_slide_tick_has_no_transition() {
        let t0 = Instant::now();
        let mut c = Carousel::new(1, cfg(), t0);
        assert!(c.tick(t0 + Duration::from_millis(100)));
        assert_eq!(c.index(), 0);
        assert!(!c.in_transition(t0 + Duration::from_millis(101)));
    }
}
