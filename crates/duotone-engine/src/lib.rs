//! Duotone engine crate.
//!
//! Platform + GPU runtime around `duotone-core`: window and event loop,
//! pointer input translation, frame pacing, and the wgpu renderer for the
//! core's draw stream.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod render;
