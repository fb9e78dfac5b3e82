//! Color model and the fixed backdrop palette.

mod color;
mod palette;

pub use color::Color;
pub use palette::{ColorPair, Palette};
