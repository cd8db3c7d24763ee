pub mod app;
pub mod content;
pub mod errors;
pub mod input;
pub mod runner;
pub mod ui;

pub use crate::app::{App, Carousel, CarouselConfig};
pub use crate::content::{Contact, Profile, ProjectEntry, SkillEntry};
