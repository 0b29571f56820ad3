//! Voxel world storage, meshing and generation for the Burden engine.
//!
//! - [`Chunk`]: a 32³ block grid with a cached, face-culled mesh
//! - [`VoxelWorld`]: a W×W grid of chunks with global coordinate mapping and
//!   neighbor remesh propagation
//! - [`TerrainGenerator`]: noise heightmap terrain
//! - [`MeshBackend`]: the seam to whatever uploads and draws vertex buffers

pub mod atlas;
pub mod chunk;
pub mod generation;
pub mod mesh;
pub mod meshing;
pub mod world;

pub use atlas::{atlas_tile, AtlasTile};
pub use chunk::Chunk;
pub use generation::{TerrainConfig, TerrainGenerator, WorldSeed};
pub use mesh::{BackendStats, DrawCall, HeadlessBackend, MeshBackend, MeshId, MeshVertex};
pub use meshing::{build_chunk_mesh, BlockFace};
pub use world::{VoxelWorld, WorldConfig, MAX_WORLD_SIZE};
