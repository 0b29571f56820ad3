//! Player control and frame orchestration for the Burden engine.
//!
//! [`Game`] owns every subsystem and runs one frame at a time:
//! mouse look, the [`PlayerController`], gravity, target selection and
//! finally the world draw. All state is passed explicitly; nothing here
//! reaches for a global.

mod config;
mod controller;
mod game;

pub use config::{ControllerConfig, GameConfig};
pub use controller::PlayerController;
pub use game::{FrameReport, Game};
