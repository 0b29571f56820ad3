//! Per-frame input state.

use glam::Vec2;
use hashbrown::HashMap;
use tracing::trace;
use winit::event::{DeviceEvent, ElementState, WindowEvent};
use winit::keyboard::PhysicalKey;

use crate::action::{Action, Bindings, InputBinding};
use crate::button_state::ButtonState;
use crate::mouse::MouseButton;

/// Collects window and device events into queryable state.
///
/// Events arrive through [`InputManager::process_window_event`] or, for
/// scripted and test input, [`InputManager::press`] / [`InputManager::release`].
/// Call [`InputManager::end_frame`] once per frame after the state was read.
#[derive(Debug, Clone)]
pub struct InputManager {
    bindings: Bindings,
    inputs: HashMap<InputBinding, ButtonState>,
    actions: [ButtonState; Action::COUNT],
    cursor_positions: Vec<Vec2>,
    mouse_delta: Vec2,
}

impl InputManager {
    pub fn new(bindings: Bindings) -> Self {
        Self {
            bindings,
            inputs: HashMap::new(),
            actions: [ButtonState::Released; Action::COUNT],
            cursor_positions: Vec::new(),
            mouse_delta: Vec2::ZERO,
        }
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Replace the bindings. Held inputs are released first so no action
    /// stays stuck down.
    pub fn set_bindings(&mut self, bindings: Bindings) {
        self.release_all();
        self.bindings = bindings;
    }

    /// Handle a window event. Returns true if it was consumed.
    pub fn process_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.set(code.into(), event.state == ElementState::Pressed);
                    true
                } else {
                    false
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                match MouseButton::try_from(*button) {
                    Ok(button) => {
                        self.set(button.into(), *state == ElementState::Pressed);
                        true
                    }
                    Err(()) => false,
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(Vec2::new(position.x as f32, position.y as f32));
                true
            }
            WindowEvent::Focused(false) => {
                self.release_all();
                false
            }
            _ => false,
        }
    }

    /// Handle a device event (raw mouse motion).
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.mouse_delta += Vec2::new(delta.0 as f32, delta.1 as f32);
        }
    }

    pub fn press(&mut self, binding: impl Into<InputBinding>) {
        self.set(binding.into(), true);
    }

    pub fn release(&mut self, binding: impl Into<InputBinding>) {
        self.set(binding.into(), false);
    }

    /// Record an absolute cursor position, in window pixels.
    pub fn cursor_moved(&mut self, position: Vec2) {
        self.cursor_positions.push(position);
    }

    fn set(&mut self, binding: InputBinding, pressed: bool) {
        self.inputs.entry(binding).or_default().set(pressed);
        if let Some(action) = self.bindings.action_for(binding) {
            trace!(?binding, ?action, pressed, "Input");
            self.refresh_action(action);
        }
    }

    /// An action is held while any of its inputs is held. It gets a press
    /// edge when the first input goes down and a release edge when the last
    /// one comes up.
    fn refresh_action(&mut self, action: Action) {
        let held = self
            .bindings
            .bindings_for(action)
            .any(|b| self.inputs.get(&b).is_some_and(|s| s.is_pressed()));
        self.actions[action.index()].set(held);
    }

    fn release_all(&mut self) {
        for state in self.inputs.values_mut() {
            state.release();
        }
        for state in &mut self.actions {
            state.release();
        }
    }

    pub fn action_state(&self, action: Action) -> ButtonState {
        self.actions[action.index()]
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.action_state(action).is_pressed()
    }

    pub fn is_just_pressed(&self, action: Action) -> bool {
        self.action_state(action).is_just_pressed()
    }

    pub fn is_just_released(&self, action: Action) -> bool {
        self.action_state(action).is_just_released()
    }

    /// Raw state of one input, bound or not.
    pub fn input_state(&self, binding: impl Into<InputBinding>) -> ButtonState {
        self.inputs.get(&binding.into()).copied().unwrap_or_default()
    }

    /// Cursor positions recorded this frame, oldest first.
    pub fn cursor_positions(&self) -> &[Vec2] {
        &self.cursor_positions
    }

    /// Most recent cursor position this frame.
    pub fn cursor_position(&self) -> Option<Vec2> {
        self.cursor_positions.last().copied()
    }

    /// Raw mouse motion accumulated this frame.
    pub const fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    pub fn end_frame(&mut self) {
        for state in self.inputs.values_mut() {
            state.end_frame();
        }
        for state in &mut self.actions {
            state.end_frame();
        }
        self.cursor_positions.clear();
        self.mouse_delta = Vec2::ZERO;
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(Bindings::default())
    }
}
