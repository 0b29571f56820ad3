//! Core types and traits for the Burden voxel engine.
//!
//! This crate provides the foundational types used throughout the engine:
//! - Block identifiers
//! - Coordinate systems (world, chunk, local)
//! - The read-only voxel query and physical body traits
//! - The engine error type

pub mod coords;
pub mod error;
pub mod traits;
pub mod types;

pub use coords::{ChunkPos, LocalPos, WorldPos};
pub use error::{Error, Result};
pub use traits::{Body, VoxelQuery};
pub use types::{BlockId, MovementMode};

/// Engine-wide constants
pub mod constants {
    /// Size of a chunk in voxels per axis
    pub const CHUNK_SIZE: usize = 32;
    /// Chunk size as a signed integer for coordinate math
    pub const CHUNK_SIZE_I32: i32 = CHUNK_SIZE as i32;
    /// Total voxels in a chunk (32^3)
    pub const CHUNK_VOLUME: usize = CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE;
}
