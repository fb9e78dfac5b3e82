//! GPU rendering subsystem.
//!
//! Renderers consume the core's draw stream and issue wgpu commands; each
//! renderer owns its own GPU resources (pipeline, buffers).
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - The vertex shader converts to NDC using a viewport uniform.

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
