use super::types::{InputEvent, PointerMoveEvent};

/// Last known pointer position for a single window.
///
/// winit reports button transitions without coordinates; the runtime uses
/// this state to attach the most recent move position to button events.
/// `None` until the pointer first enters the window, and again after it
/// leaves.
#[derive(Debug, Default)]
pub struct PointerState {
    pub pos: Option<(f32, f32)>,
}

impl PointerState {
    /// Applies a translated event to the tracked state.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pos = Some((*x, *y));
            }
            InputEvent::PointerButton(b) => {
                self.pos = Some((b.x, b.y));
            }
            InputEvent::PointerLeft => {
                self.pos = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{MouseButton, MouseButtonState, PointerButtonEvent};

    #[test]
    fn tracks_moves_and_forgets_on_leave() {
        let mut state = PointerState::default();
        assert_eq!(state.pos, None);

        state.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 3.0, y: 4.0 }));
        assert_eq!(state.pos, Some((3.0, 4.0)));

        state.apply_event(&InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x: 5.0,
            y: 6.0,
        }));
        assert_eq!(state.pos, Some((5.0, 6.0)));

        state.apply_event(&InputEvent::PointerLeft);
        assert_eq!(state.pos, None);
    }
}
