//! Camera and selection outline for the Burden engine.
//!
//! Graphics API plumbing lives behind `burden_world::MeshBackend`; this crate
//! only produces the matrices and line geometry a backend needs.

pub mod camera;
pub mod outline;

pub use camera::{Camera, CameraConfig, CameraMovement, CameraUniforms};
pub use outline::{outline_transform, BOX_LINES};
