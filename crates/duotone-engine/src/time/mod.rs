//! Frame timing.
//!
//! One `FrameClock` per window; `tick()` once per redrawn frame. The fade
//! itself steps by a fixed per-frame increment and ignores wall-clock
//! delta, so `FrameTime` mainly feeds diagnostics.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
