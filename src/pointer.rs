//! Pointer (mouse/touch) input state fed into the engine each frame.

use crate::float::Float;
use crate::vec::Vec2;

/// Which pointer button is held during an interaction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Drag: particles near the pointer inherit its motion.
    Primary,
    /// Cut: particles near the pointer lose all their constraints.
    Secondary,
}

/// Per-frame pointer state.
///
/// The rendering shell writes this from its event stream and passes it into
/// [`Engine::step`](crate::engine::Engine::step). Writes between frames are
/// last-write-wins; the engine reads the state once at the start of a step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerState<F: Float> {
    pub down: bool,
    pub button: PointerButton,
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
}

impl<F: Float> PointerState<F> {
    /// Pointer not pressed, at the origin.
    pub fn released() -> Self {
        PointerState {
            down: false,
            button: PointerButton::Primary,
            pos: Vec2::zero(),
            prev_pos: Vec2::zero(),
        }
    }

    /// Begin a press at `pos`.
    ///
    /// Seeds `prev_pos = pos`, so the first frame of a drag injects no
    /// velocity (a touch press has no known prior position).
    pub fn press(&mut self, button: PointerButton, pos: Vec2<F>) {
        self.button = button;
        self.pos = pos;
        self.prev_pos = pos;
        self.down = true;
    }

    /// Track pointer motion; shifts the current position into `prev_pos`.
    pub fn move_to(&mut self, pos: Vec2<F>) {
        self.prev_pos = self.pos;
        self.pos = pos;
    }

    /// End the press. Position tracking continues via [`move_to`](Self::move_to).
    pub fn release(&mut self) {
        self.down = false;
    }

    /// Pointer displacement since the previous frame.
    pub fn frame_delta(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }
}

impl<F: Float> Default for PointerState<F> {
    fn default() -> Self {
        Self::released()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_seeds_zero_delta() {
        let mut pointer: PointerState<f32> = PointerState::released();
        pointer.move_to(Vec2::new(50.0, 50.0));
        pointer.press(PointerButton::Primary, Vec2::new(100.0, 100.0));
        assert!(pointer.down);
        assert_eq!(pointer.frame_delta(), Vec2::zero());
    }

    #[test]
    fn move_shifts_previous() {
        let mut pointer: PointerState<f32> = PointerState::released();
        pointer.press(PointerButton::Primary, Vec2::new(10.0, 10.0));
        pointer.move_to(Vec2::new(14.0, 13.0));
        assert_eq!(pointer.prev_pos, Vec2::new(10.0, 10.0));
        assert_eq!(pointer.frame_delta(), Vec2::new(4.0, 3.0));
    }
}
