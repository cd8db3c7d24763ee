pub mod carousel;
pub mod core;
pub mod settings;

pub use carousel::{Carousel, CarouselConfig};
pub use core::App;
