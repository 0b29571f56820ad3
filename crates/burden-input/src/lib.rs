//! Input handling for the Burden engine.
//!
//! Window events come in through [`InputManager`], get resolved to gameplay
//! [`Action`]s via [`Bindings`], and are read back by the player controller
//! once per frame. Nothing here holds a global: whoever owns the event loop
//! owns the manager and passes the camera to [`MouseLook`] explicitly.
//!
//! ```ignore
//! // event handler
//! input.process_window_event(&event);
//!
//! // frame
//! mouse_look.apply(&input, &mut camera);
//! if input.is_just_pressed(Action::ToggleFly) {
//!     camera.toggle_mode();
//! }
//! input.end_frame();
//! ```

mod action;
mod button_state;
mod manager;
mod mouse;

pub use action::{Action, Bindings, InputBinding};
pub use button_state::ButtonState;
pub use manager::InputManager;
pub use mouse::{MouseButton, MouseLook};

// Re-export winit types commonly used with input
pub use winit::event::{DeviceEvent, WindowEvent};
pub use winit::keyboard::KeyCode;
