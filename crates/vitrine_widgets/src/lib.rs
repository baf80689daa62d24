//! Vitrine Widgets
//!
//! The two decorative rotation widgets: a continuous-angle 3D ring
//! slider (drag, press-and-hold, perpetual auto-rotation) and a discrete
//! trailer carousel (center/left/right markers over a circular index).

pub mod ring;
pub mod trailer;

pub use ring::{HoldDirection, RingSlider};
pub use trailer::TrailerCarousel;
