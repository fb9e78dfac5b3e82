//! Coordinate and geometry types shared by hit testing and composition.
//!
//! Canonical space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down

mod triangle;
mod vec2;
mod viewport;

pub use triangle::Triangle;
pub use vec2::Vec2;
pub use viewport::Viewport;
