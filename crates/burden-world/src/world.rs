//! The finite chunk grid and its world-space block interface.

use burden_core::{BlockId, ChunkPos, Error, Result, VoxelQuery, WorldPos};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::chunk::Chunk;
use crate::generation::TerrainGenerator;
use crate::mesh::MeshBackend;

/// Largest accepted `world_size`, in chunks per side.
pub const MAX_WORLD_SIZE: i32 = 256;

/// World layout configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Chunks per side of the square world grid.
    pub world_size: i32,
    /// Chunks closer than this (grid distance) to the viewer are drawn.
    pub render_distance: i32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            world_size: 5,
            render_distance: 8,
        }
    }
}

impl WorldConfig {
    #[must_use]
    pub const fn with_world_size(mut self, world_size: i32) -> Self {
        self.world_size = world_size;
        self
    }

    #[must_use]
    pub const fn with_render_distance(mut self, render_distance: i32) -> Self {
        self.render_distance = render_distance;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_WORLD_SIZE).contains(&self.world_size) {
            return Err(Error::InvalidConfig(format!(
                "world_size must be in 1..={MAX_WORLD_SIZE}, got {}",
                self.world_size
            )));
        }
        if self.render_distance < 0 {
            return Err(Error::InvalidConfig(format!(
                "render_distance must not be negative, got {}",
                self.render_distance
            )));
        }
        Ok(())
    }
}

/// A square grid of `world_size × world_size` chunks starting at chunk (0, 0).
///
/// The world is the single owner of all block data. Edits go through
/// [`VoxelWorld::set_block`], which keeps chunk meshes in sync, and readers use
/// [`VoxelWorld::get_block`] or the [`VoxelQuery`] impl. Every mesh lives in
/// the world's backend and is released when the world is dropped.
pub struct VoxelWorld<B: MeshBackend> {
    config: WorldConfig,
    chunks: Vec<Chunk>,
    backend: B,
}

impl<B: MeshBackend> VoxelWorld<B> {
    /// Generate terrain for every chunk and build the meshes.
    pub fn new(config: WorldConfig, terrain: &TerrainGenerator, backend: B) -> Result<Self> {
        let mut world = Self::empty(config, backend)?;
        let size = world.config.world_size;
        info!("generating {size}x{size} world");

        for cx in 0..size {
            for cz in 0..size {
                let pos = ChunkPos::new(cx, cz);
                let index = world.slot(pos);
                let chunk = &mut world.chunks[index];
                terrain.fill_chunk(chunk, pos);
                chunk.update_mesh(&mut world.backend);
                trace!(
                    "chunk ({cx}, {cz}): {} blocks, {} vertices",
                    chunk.solid_count(),
                    chunk.vertex_count()
                );
            }
        }

        info!("generation complete");
        Ok(world)
    }

    /// An all-air world with no meshes.
    pub fn empty(config: WorldConfig, backend: B) -> Result<Self> {
        config.validate()?;
        let count = (config.world_size * config.world_size) as usize;
        let chunks = std::iter::repeat_with(Chunk::new).take(count).collect();
        Ok(Self {
            config,
            chunks,
            backend,
        })
    }

    pub const fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Chunks per side.
    pub const fn size(&self) -> i32 {
        self.config.world_size
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Storage slot for a chunk position, `None` outside the grid.
    pub fn chunk_index(&self, pos: ChunkPos) -> Option<usize> {
        let size = self.config.world_size;
        if (0..size).contains(&pos.x) && (0..size).contains(&pos.z) {
            Some(self.slot(pos))
        } else {
            None
        }
    }

    #[inline]
    const fn slot(&self, pos: ChunkPos) -> usize {
        (pos.x + pos.z * self.config.world_size) as usize
    }

    pub fn chunk(&self, pos: ChunkPos) -> Option<&Chunk> {
        self.chunk_index(pos).map(|i| &self.chunks[i])
    }

    /// Every chunk position in storage order.
    pub fn chunk_positions(&self) -> impl Iterator<Item = ChunkPos> {
        let size = self.config.world_size;
        (0..size).flat_map(move |z| (0..size).map(move |x| ChunkPos::new(x, z)))
    }

    /// Block at world coordinates. Anything outside the world is air.
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> BlockId {
        let Some((chunk_pos, local)) = WorldPos::new(x, y, z).split() else {
            return BlockId::AIR;
        };
        self.chunk(chunk_pos)
            .map_or(BlockId::AIR, |chunk| chunk.block(local))
    }

    /// Store a block and remesh every chunk whose visible faces may change.
    ///
    /// The owning chunk is always rebuilt. A block on a chunk's X face also
    /// rebuilds the chunk across that face, and likewise for Z, so a corner
    /// edit touches up to three chunks. Writes outside the world are ignored.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, block: BlockId) {
        let Some((pos, local)) = WorldPos::new(x, y, z).split() else {
            return;
        };
        let Some(index) = self.chunk_index(pos) else {
            return;
        };

        let (lx, lz) = (i32::from(local.x), i32::from(local.z));
        self.chunks[index].set_block(lx, y, lz, block);
        self.chunks[index].update_mesh(&mut self.backend);
        debug!("set ({x}, {y}, {z}) = {:?} in chunk ({}, {})", block, pos.x, pos.z);

        if !local.on_horizontal_face() {
            return;
        }
        for (neighbor, touching) in pos.neighbors().into_iter().zip(local.horizontal_faces()) {
            if !touching {
                continue;
            }
            let Some(slot) = self.chunk_index(neighbor) else {
                continue;
            };
            self.chunks[slot].update_mesh(&mut self.backend);
            debug!("remeshed neighbor chunk ({}, {})", neighbor.x, neighbor.z);
        }
    }

    /// Draw every chunk within `render_distance` of the viewer's chunk.
    ///
    /// Distance is the Euclidean chunk-grid distance truncated to an integer,
    /// and must be strictly below `render_distance`. Returns the number of
    /// chunks that issued a draw.
    pub fn render(&mut self, viewer: Vec3, render_distance: i32) -> usize {
        let center = ChunkPos::containing(viewer);
        let size = self.config.world_size;
        let mut drawn = 0;

        for cx in 0..size {
            for cz in 0..size {
                let pos = ChunkPos::new(cx, cz);
                if pos.grid_distance(center) >= render_distance {
                    continue;
                }
                let slot = self.slot(pos);
                if self.chunks[slot].render(&mut self.backend, pos.origin_vec3()) {
                    drawn += 1;
                }
            }
        }

        drawn
    }
}

impl<B: MeshBackend> VoxelQuery for VoxelWorld<B> {
    #[inline]
    fn block_at(&self, x: i32, y: i32, z: i32) -> BlockId {
        self.get_block(x, y, z)
    }
}

impl<B: MeshBackend> Drop for VoxelWorld<B> {
    fn drop(&mut self) {
        for chunk in &mut self.chunks {
            chunk.release_mesh(&mut self.backend);
        }
    }
}

impl<B: MeshBackend> std::fmt::Debug for VoxelWorld<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoxelWorld")
            .field("config", &self.config)
            .field("chunks", &self.chunks.len())
            .finish_non_exhaustive()
    }
}
