use crate::input::InputEvent;

use super::ctx::{FrameCtx, WindowCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Whether an input event changed anything worth repainting.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InputResponse {
    /// State changed; schedule one redraw.
    Redraw,
    /// Nothing visible changed.
    Ignored,
}

/// Application contract implemented by the controller.
pub trait App {
    /// Called synchronously for each translated input event, before any
    /// rendering it may trigger.
    ///
    /// Returning [`InputResponse::Redraw`] schedules a redraw; requests are
    /// coalesced by the windowing system, so at most one is pending no
    /// matter how many events ask for it.
    fn on_input(&mut self, window: &WindowCtx<'_>, event: &InputEvent) -> InputResponse {
        let _ = (window, event);
        InputResponse::Ignored
    }

    /// Called once per redrawn frame.
    ///
    /// The runtime never redraws continuously; a frame happens at startup,
    /// on resize, after `on_input` requested one, or because the app
    /// re-requested one from here (see [`WindowCtx::request_redraw`]).
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
