//! Coordinate systems for the voxel world.
//!
//! The world is a single chunk tall: chunks form a 2-D grid on the XZ plane and
//! world Y is used directly as the chunk-local Y.

use crate::constants::{CHUNK_SIZE, CHUNK_SIZE_I32};
use bytemuck::{Pod, Zeroable};
use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

/// Position within a chunk (0 to CHUNK_SIZE-1 per axis).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct LocalPos {
    pub x: u8,
    pub y: u8,
    pub z: u8,
}

impl LocalPos {
    /// Create a new local position
    #[inline]
    pub const fn new(x: u8, y: u8, z: u8) -> Self {
        debug_assert!((x as usize) < CHUNK_SIZE);
        debug_assert!((y as usize) < CHUNK_SIZE);
        debug_assert!((z as usize) < CHUNK_SIZE);
        Self { x, y, z }
    }

    /// Validate signed coordinates against `[0, CHUNK_SIZE)` on every axis.
    #[inline]
    pub const fn checked(x: i32, y: i32, z: i32) -> Option<Self> {
        if in_chunk(x) && in_chunk(y) && in_chunk(z) {
            Some(Self {
                x: x as u8,
                y: y as u8,
                z: z as u8,
            })
        } else {
            None
        }
    }

    /// Linear index for flat array storage, Y-major: `x + z*N + y*N*N`.
    #[inline]
    pub const fn to_index(self) -> usize {
        self.x as usize
            + (self.z as usize) * CHUNK_SIZE
            + (self.y as usize) * CHUNK_SIZE * CHUNK_SIZE
    }

    /// Create from linear index
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        let x = (index % CHUNK_SIZE) as u8;
        let z = ((index / CHUNK_SIZE) % CHUNK_SIZE) as u8;
        let y = (index / (CHUNK_SIZE * CHUNK_SIZE)) as u8;
        Self { x, y, z }
    }

    /// Horizontal chunk faces this position lies on, in
    /// [`ChunkPos::neighbors`] order: -X, +X, -Z, +Z.
    #[inline]
    pub const fn horizontal_faces(self) -> [bool; 4] {
        let max = (CHUNK_SIZE - 1) as u8;
        [self.x == 0, self.x == max, self.z == 0, self.z == max]
    }

    /// True if the position touches the chunk face on the X or Z axis.
    #[inline]
    pub const fn on_horizontal_face(self) -> bool {
        let [nx, px, nz, pz] = self.horizontal_faces();
        nx || px || nz || pz
    }

    #[inline]
    pub const fn to_ivec3(self) -> IVec3 {
        IVec3::new(self.x as i32, self.y as i32, self.z as i32)
    }
}

#[inline]
const fn in_chunk(v: i32) -> bool {
    v >= 0 && v < CHUNK_SIZE_I32
}

/// Chunk position on the horizontal chunk grid.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct ChunkPos {
    pub x: i32,
    pub z: i32,
}

impl ChunkPos {
    /// Create a new chunk position
    #[inline]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// World-space voxel coordinate of the chunk's minimum corner.
    #[inline]
    pub const fn origin(self) -> WorldPos {
        WorldPos::new(self.x * CHUNK_SIZE_I32, 0, self.z * CHUNK_SIZE_I32)
    }

    /// Origin as a float translation for rendering.
    #[inline]
    pub fn origin_vec3(self) -> Vec3 {
        self.origin().to_vec3()
    }

    /// Chunk containing a continuous world position (floor division).
    #[inline]
    pub fn containing(position: Vec3) -> Self {
        WorldPos::from(position).chunk_pos()
    }

    /// The four horizontal neighbors: -X, +X, -Z, +Z.
    pub const fn neighbors(self) -> [Self; 4] {
        [
            Self::new(self.x - 1, self.z),
            Self::new(self.x + 1, self.z),
            Self::new(self.x, self.z - 1),
            Self::new(self.x, self.z + 1),
        ]
    }

    /// Euclidean distance on the chunk grid, truncated to an integer.
    #[inline]
    pub fn grid_distance(self, other: Self) -> i32 {
        let dx = (self.x - other.x) as f32;
        let dz = (self.z - other.z) as f32;
        (dx * dx + dz * dz).sqrt() as i32
    }
}

/// World position in voxel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl WorldPos {
    /// Create a new world position
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Get the chunk containing this position.
    ///
    /// Uses floor division so that `x = -1` lands in chunk `-1`, not chunk `0`.
    #[inline]
    pub const fn chunk_pos(self) -> ChunkPos {
        ChunkPos::new(
            self.x.div_euclid(CHUNK_SIZE_I32),
            self.z.div_euclid(CHUNK_SIZE_I32),
        )
    }

    /// Horizontal local coordinates in `[0, CHUNK_SIZE)`, sign-corrected.
    #[inline]
    pub const fn local_xz(self) -> (i32, i32) {
        (
            self.x.rem_euclid(CHUNK_SIZE_I32),
            self.z.rem_euclid(CHUNK_SIZE_I32),
        )
    }

    /// Split into chunk and local position.
    ///
    /// Returns `None` when `y` lies outside the single chunk-tall world.
    #[inline]
    pub const fn split(self) -> Option<(ChunkPos, LocalPos)> {
        let (lx, lz) = self.local_xz();
        match LocalPos::checked(lx, self.y, lz) {
            Some(local) => Some((self.chunk_pos(), local)),
            None => None,
        }
    }

    /// Create from chunk and local position
    #[inline]
    pub const fn from_chunk_local(chunk: ChunkPos, local: LocalPos) -> Self {
        Self::new(
            chunk.x * CHUNK_SIZE_I32 + local.x as i32,
            local.y as i32,
            chunk.z * CHUNK_SIZE_I32 + local.z as i32,
        )
    }

    /// Convert to floating point Vec3
    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

impl From<Vec3> for WorldPos {
    fn from(v: Vec3) -> Self {
        Self::new(v.x.floor() as i32, v.y.floor() as i32, v.z.floor() as i32)
    }
}

impl From<IVec3> for WorldPos {
    fn from(v: IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
