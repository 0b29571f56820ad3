//! Mesh vertex format and the backend seam for GPU buffers.
//!
//! Chunks never talk to a graphics API directly. They hand vertex data to a
//! [`MeshBackend`], which owns the actual buffers and hands back opaque
//! [`MeshId`] handles. [`HeadlessBackend`] keeps everything in memory and is
//! what tests, benches and the sandbox use.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use hashbrown::HashMap;
use tracing::warn;

/// Interleaved vertex: position followed by atlas texture coordinates.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl MeshVertex {
    /// Byte stride of one vertex in an uploaded buffer.
    pub const STRIDE: usize = std::mem::size_of::<Self>();

    #[inline]
    pub const fn new(position: [f32; 3], uv: [f32; 2]) -> Self {
        Self { position, uv }
    }
}

/// Opaque handle to a vertex buffer owned by a backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshId(pub u32);

/// Uploads and draws unindexed triangle-list meshes.
pub trait MeshBackend {
    /// Allocate a new, empty vertex buffer.
    fn create_mesh(&mut self) -> MeshId;

    /// Replace the contents of an existing buffer.
    fn upload(&mut self, mesh: MeshId, vertices: &[MeshVertex]);

    /// Draw `vertex_count` vertices, translated by `origin`.
    fn draw(&mut self, mesh: MeshId, vertex_count: u32, origin: Vec3);

    /// Free a buffer. The id must not be used afterwards.
    fn destroy(&mut self, mesh: MeshId);
}

impl<B: MeshBackend + ?Sized> MeshBackend for &mut B {
    fn create_mesh(&mut self) -> MeshId {
        (**self).create_mesh()
    }

    fn upload(&mut self, mesh: MeshId, vertices: &[MeshVertex]) {
        (**self).upload(mesh, vertices);
    }

    fn draw(&mut self, mesh: MeshId, vertex_count: u32, origin: Vec3) {
        (**self).draw(mesh, vertex_count, origin);
    }

    fn destroy(&mut self, mesh: MeshId) {
        (**self).destroy(mesh);
    }
}

/// A recorded draw call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCall {
    pub mesh: MeshId,
    pub vertex_count: u32,
    pub origin: Vec3,
}

/// Lifetime counters for a [`HeadlessBackend`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BackendStats {
    pub created: u64,
    pub uploads: u64,
    pub destroyed: u64,
    pub draws: u64,
}

/// In-memory backend that records what a GPU backend would have done.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    next_id: u32,
    meshes: HashMap<MeshId, Vec<MeshVertex>>,
    upload_counts: HashMap<MeshId, u64>,
    draw_log: Vec<DrawCall>,
    stats: BackendStats,
}

impl HeadlessBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertex data last uploaded to a live mesh.
    pub fn vertices(&self, mesh: MeshId) -> Option<&[MeshVertex]> {
        self.meshes.get(&mesh).map(Vec::as_slice)
    }

    /// Number of uploads a mesh has received since creation.
    pub fn upload_count(&self, mesh: MeshId) -> u64 {
        self.upload_counts.get(&mesh).copied().unwrap_or(0)
    }

    /// Number of meshes created and not yet destroyed.
    pub fn live_meshes(&self) -> usize {
        self.meshes.len()
    }

    pub const fn stats(&self) -> BackendStats {
        self.stats
    }

    /// Draw calls recorded since the last [`Self::take_draws`].
    pub fn draws(&self) -> &[DrawCall] {
        &self.draw_log
    }

    /// Drain the recorded draw calls, typically once per frame.
    pub fn take_draws(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.draw_log)
    }
}

impl MeshBackend for HeadlessBackend {
    fn create_mesh(&mut self) -> MeshId {
        let id = MeshId(self.next_id);
        self.next_id += 1;
        self.meshes.insert(id, Vec::new());
        self.stats.created += 1;
        id
    }

    fn upload(&mut self, mesh: MeshId, vertices: &[MeshVertex]) {
        let Some(buffer) = self.meshes.get_mut(&mesh) else {
            warn!("upload to unknown mesh {:?}", mesh);
            return;
        };
        buffer.clear();
        buffer.extend_from_slice(vertices);
        *self.upload_counts.entry(mesh).or_default() += 1;
        self.stats.uploads += 1;
    }

    fn draw(&mut self, mesh: MeshId, vertex_count: u32, origin: Vec3) {
        if !self.meshes.contains_key(&mesh) {
            warn!("draw of unknown mesh {:?}", mesh);
            return;
        }
        self.draw_log.push(DrawCall {
            mesh,
            vertex_count,
            origin,
        });
        self.stats.draws += 1;
    }

    fn destroy(&mut self, mesh: MeshId) {
        if self.meshes.remove(&mesh).is_some() {
            self.upload_counts.remove(&mesh);
            self.stats.destroyed += 1;
        }
    }
}
