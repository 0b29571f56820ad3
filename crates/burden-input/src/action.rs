//! Gameplay actions and their input bindings.

use hashbrown::HashMap;
use winit::keyboard::KeyCode;

use crate::mouse::MouseButton;

/// Something the player can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveForward,
    MoveBack,
    MoveLeft,
    MoveRight,
    /// Rise while flying, jump while walking.
    FlyUp,
    FlyDown,
    Sprint,
    ToggleFly,
    Hotbar1,
    Hotbar2,
    Hotbar3,
    Break,
    Place,
}

impl Action {
    pub const COUNT: usize = 13;

    pub const ALL: [Self; Self::COUNT] = [
        Self::MoveForward,
        Self::MoveBack,
        Self::MoveLeft,
        Self::MoveRight,
        Self::FlyUp,
        Self::FlyDown,
        Self::Sprint,
        Self::ToggleFly,
        Self::Hotbar1,
        Self::Hotbar2,
        Self::Hotbar3,
        Self::Break,
        Self::Place,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A physical input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputBinding {
    Key(KeyCode),
    Mouse(MouseButton),
}

impl From<KeyCode> for InputBinding {
    fn from(key: KeyCode) -> Self {
        Self::Key(key)
    }
}

impl From<MouseButton> for InputBinding {
    fn from(button: MouseButton) -> Self {
        Self::Mouse(button)
    }
}

/// Input to action mapping. Each input drives at most one action; an action
/// may have several inputs.
#[derive(Debug, Clone)]
pub struct Bindings {
    map: HashMap<InputBinding, Action>,
}

impl Bindings {
    /// No bindings at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Bind an input, replacing whatever it was bound to before.
    pub fn bind(&mut self, binding: impl Into<InputBinding>, action: Action) {
        self.map.insert(binding.into(), action);
    }

    #[must_use]
    pub fn with(mut self, binding: impl Into<InputBinding>, action: Action) -> Self {
        self.bind(binding, action);
        self
    }

    pub fn unbind(&mut self, binding: impl Into<InputBinding>) -> Option<Action> {
        self.map.remove(&binding.into())
    }

    pub fn action_for(&self, binding: InputBinding) -> Option<Action> {
        self.map.get(&binding).copied()
    }

    /// Every input bound to `action`, in no particular order.
    pub fn bindings_for(&self, action: Action) -> impl Iterator<Item = InputBinding> + '_ {
        self.map
            .iter()
            .filter(move |(_, a)| **a == action)
            .map(|(b, _)| *b)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for Bindings {
    /// WASD movement, Space / Left Ctrl for up and down, Left Shift to sprint,
    /// C to toggle flight, 1-3 for the hotbar, left click to break and right
    /// click to place.
    fn default() -> Self {
        Self::empty()
            .with(KeyCode::KeyW, Action::MoveForward)
            .with(KeyCode::KeyS, Action::MoveBack)
            .with(KeyCode::KeyA, Action::MoveLeft)
            .with(KeyCode::KeyD, Action::MoveRight)
            .with(KeyCode::Space, Action::FlyUp)
            .with(KeyCode::ControlLeft, Action::FlyDown)
            .with(KeyCode::ShiftLeft, Action::Sprint)
            .with(KeyCode::KeyC, Action::ToggleFly)
            .with(KeyCode::Digit1, Action::Hotbar1)
            .with(KeyCode::Digit2, Action::Hotbar2)
            .with(KeyCode::Digit3, Action::Hotbar3)
            .with(MouseButton::Left, Action::Break)
            .with(MouseButton::Right, Action::Place)
    }
}
