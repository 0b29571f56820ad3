//! Player physics and voxel raycasting for the Burden engine.
//!
//! Everything here reads the world through [`burden_core::VoxelQuery`] and
//! moves anything implementing [`burden_core::Body`], so physics never sees
//! chunks, meshes or the camera type.
//!
//! - [`check_collision`]: point-sampled player hitbox test
//! - [`Physics`]: gravity, jumping and axis-separated horizontal movement
//! - [`raycast`]: DDA voxel traversal for block picking

pub mod body;
pub mod collision;
pub mod config;
pub mod raycast;

pub use body::Physics;
pub use collision::{check_collision, sample_points};
pub use config::PhysicsConfig;
pub use raycast::{raycast, RaycastResult};
