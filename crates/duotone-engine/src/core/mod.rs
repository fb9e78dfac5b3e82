//! Core engine-facing contracts.
//!
//! The stable interface between the runtime (platform loop) and the
//! application controller: synchronous input callbacks plus a per-frame
//! render context. Runtime internals stay out of user code.

mod app;
mod ctx;

pub use app::{App, AppControl, InputResponse};
pub use ctx::{FrameCtx, WindowCtx};
