//! Deterministic input script for the sandbox session.

use burden_input::{InputBinding, InputManager, KeyCode, MouseButton};
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Press(InputBinding),
    Release(InputBinding),
    Cursor(Vec2),
}

const W: InputBinding = InputBinding::Key(KeyCode::KeyW);
const D: InputBinding = InputBinding::Key(KeyCode::KeyD);
const SPACE: InputBinding = InputBinding::Key(KeyCode::Space);
const SHIFT: InputBinding = InputBinding::Key(KeyCode::ShiftLeft);
const FLY: InputBinding = InputBinding::Key(KeyCode::KeyC);
const STONE: InputBinding = InputBinding::Key(KeyCode::Digit3);
const BREAK: InputBinding = InputBinding::Mouse(MouseButton::Left);
const PLACE: InputBinding = InputBinding::Mouse(MouseButton::Right);

/// `(frame, step)` pairs, sorted by frame. At 60 Hz: settle for 1.5 s, walk,
/// sprint-strafe, jump, look down, break, place stone, then fly upward.
pub const SCRIPT: &[(u64, Step)] = &[
    (90, Step::Press(W)),
    (150, Step::Press(SHIFT)),
    (150, Step::Press(D)),
    (170, Step::Release(D)),
    (170, Step::Release(SHIFT)),
    (170, Step::Release(W)),
    (180, Step::Press(SPACE)),
    (181, Step::Release(SPACE)),
    (200, Step::Cursor(Vec2::new(640.0, 360.0))),
    (201, Step::Cursor(Vec2::new(640.0, 960.0))),
    (210, Step::Press(BREAK)),
    (211, Step::Release(BREAK)),
    (220, Step::Press(STONE)),
    (220, Step::Press(PLACE)),
    (221, Step::Release(PLACE)),
    (221, Step::Release(STONE)),
    (240, Step::Press(FLY)),
    (241, Step::Release(FLY)),
    (245, Step::Press(SPACE)),
    (300, Step::Release(SPACE)),
];

/// Feed every step scheduled for `frame` into `input`.
pub fn apply(frame: u64, input: &mut InputManager) {
    for (_, step) in SCRIPT.iter().filter(|(at, _)| *at == frame) {
        match *step {
            Step::Press(binding) => input.press(binding),
            Step::Release(binding) => input.release(binding),
            Step::Cursor(position) => input.cursor_moved(position),
        }
    }
}
