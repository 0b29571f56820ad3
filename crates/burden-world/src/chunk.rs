//! Chunk block storage and its cached mesh.

use burden_core::constants::CHUNK_VOLUME;
use burden_core::{BlockId, LocalPos};
use glam::Vec3;

use crate::mesh::{MeshBackend, MeshId};
use crate::meshing::build_chunk_mesh;

/// A 32×32×32 cube of blocks.
///
/// Blocks live in a flat Y-major array (see [`LocalPos::to_index`]). All
/// accessors taking signed coordinates are total: reads outside the chunk
/// return air and writes outside it are dropped.
///
/// The mesh is a derived artifact. It is stale until [`Chunk::update_mesh`]
/// runs and must be rebuilt after any block change; the world does that for
/// edits made through it.
pub struct Chunk {
    blocks: Box<[BlockId]>,
    mesh: Option<MeshId>,
    vertex_count: u32,
    mesh_revision: u64,
}

impl Chunk {
    /// An all-air chunk with no mesh.
    pub fn new() -> Self {
        Self {
            blocks: vec![BlockId::AIR; CHUNK_VOLUME].into_boxed_slice(),
            mesh: None,
            vertex_count: 0,
            mesh_revision: 0,
        }
    }

    /// Block at a validated local position.
    #[inline]
    pub fn block(&self, pos: LocalPos) -> BlockId {
        self.blocks[pos.to_index()]
    }

    /// Block at signed local coordinates, or air when out of range.
    #[inline]
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> BlockId {
        LocalPos::checked(x, y, z).map_or(BlockId::AIR, |pos| self.block(pos))
    }

    /// Store a block. Out-of-range coordinates are ignored.
    ///
    /// Does not touch the mesh.
    #[inline]
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, block: BlockId) {
        if let Some(pos) = LocalPos::checked(x, y, z) {
            self.blocks[pos.to_index()] = block;
        }
    }

    /// Solidity test for meshing. Anything outside the chunk counts as air.
    #[inline]
    pub fn is_solid(&self, x: i32, y: i32, z: i32) -> bool {
        self.get_block(x, y, z).is_solid()
    }

    /// Overwrite every block.
    pub fn fill(&mut self, block: BlockId) {
        self.blocks.fill(block);
    }

    /// True if every block is air.
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|b| b.is_air())
    }

    /// Number of non-air blocks.
    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_solid()).count()
    }

    /// Raw block storage in index order.
    pub fn blocks(&self) -> &[BlockId] {
        &self.blocks
    }

    /// Rebuild the mesh from the current blocks and upload it.
    ///
    /// The backend buffer is created on the first non-empty build and reused
    /// afterwards. An empty build records a zero vertex count and skips the
    /// upload, leaving any previous buffer untouched but undrawn.
    pub fn update_mesh<B: MeshBackend + ?Sized>(&mut self, backend: &mut B) {
        let vertices = build_chunk_mesh(self);
        self.vertex_count = vertices.len() as u32;
        self.mesh_revision += 1;

        if vertices.is_empty() {
            return;
        }

        let mesh = match self.mesh {
            Some(mesh) => mesh,
            None => {
                let mesh = backend.create_mesh();
                self.mesh = Some(mesh);
                mesh
            }
        };
        backend.upload(mesh, &vertices);
    }

    /// Issue a draw for this chunk at `origin`. Returns whether anything was drawn.
    pub fn render<B: MeshBackend + ?Sized>(&self, backend: &mut B, origin: Vec3) -> bool {
        match self.mesh {
            Some(mesh) if self.vertex_count > 0 => {
                backend.draw(mesh, self.vertex_count, origin);
                true
            }
            _ => false,
        }
    }

    /// Destroy the backend buffer, if any.
    pub fn release_mesh<B: MeshBackend + ?Sized>(&mut self, backend: &mut B) {
        if let Some(mesh) = self.mesh.take() {
            backend.destroy(mesh);
        }
        self.vertex_count = 0;
    }

    pub const fn mesh(&self) -> Option<MeshId> {
        self.mesh
    }

    /// Vertices in the last built mesh.
    pub const fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// How many times the mesh has been rebuilt.
    pub const fn mesh_revision(&self) -> u64 {
        self.mesh_revision
    }
}

impl Default for Chunk {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chunk")
            .field("solid", &self.solid_count())
            .field("mesh", &self.mesh)
            .field("vertex_count", &self.vertex_count)
            .field("mesh_revision", &self.mesh_revision)
            .finish()
    }
}
