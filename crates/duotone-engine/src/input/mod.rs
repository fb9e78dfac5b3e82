//! Pointer input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types. The
//! runtime translates window-system events into [`InputEvent`]s; the
//! backdrop consumes nothing but pointer position and clicks.

mod state;
mod types;

pub use state::PointerState;
pub use types::{
    InputEvent,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};
