//! Renderer-agnostic draw stream.
//!
//! Responsibilities:
//! - store solid-fill draw commands
//! - provide deterministic paint order (layer, then insertion order)
//!
//! Compositing order is part of the backdrop's contract, so it is encoded
//! here as data instead of being an incidental effect of call ordering.

mod cmd;
mod list;

pub use cmd::{DrawCmd, TriangleCmd};
pub use list::{DrawItem, DrawList, Layer, SortKey};
