//! Duotone core crate.
//!
//! Pure geometry, palette, and crossfade logic for the interactive
//! two-color backdrop. Everything here is deterministic and platform-free;
//! the engine crate owns the window, input, and GPU pieces.

pub mod coords;
pub mod fade;
pub mod hit;
pub mod paint;
pub mod scene;

pub mod backdrop;
