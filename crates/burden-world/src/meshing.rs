//! Face-culled chunk meshing.
//!
//! Every solid block emits one quad (two triangles, six vertices) per face
//! whose neighboring cell is air or outside the chunk. There is no greedy
//! merging and no cross-chunk lookup: seam faces are always emitted from the
//! owning chunk's side.

use burden_core::constants::CHUNK_VOLUME;
use burden_core::{BlockId, LocalPos};
use glam::IVec3;

use crate::atlas::atlas_tile;
use crate::chunk::Chunk;
use crate::mesh::MeshVertex;

/// Vertices emitted for one visible face.
pub const VERTICES_PER_FACE: usize = 6;

/// The six faces of a block, in mesh emission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BlockFace {
    /// +Z
    Front = 0,
    /// -Z
    Back = 1,
    /// -X
    Left = 2,
    /// +X
    Right = 3,
    /// +Y
    Top = 4,
    /// -Y
    Bottom = 5,
}

impl BlockFace {
    pub const ALL: [Self; 6] = [
        Self::Front,
        Self::Back,
        Self::Left,
        Self::Right,
        Self::Top,
        Self::Bottom,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Offset to the neighboring cell this face looks at.
    #[inline]
    pub const fn normal(self) -> IVec3 {
        match self {
            Self::Front => IVec3::new(0, 0, 1),
            Self::Back => IVec3::new(0, 0, -1),
            Self::Left => IVec3::new(-1, 0, 0),
            Self::Right => IVec3::new(1, 0, 0),
            Self::Top => IVec3::new(0, 1, 0),
            Self::Bottom => IVec3::new(0, -1, 0),
        }
    }

    /// Unit-cube template for this face: positions in `[0, 1]` and local UVs.
    #[inline]
    pub const fn template(self) -> &'static [MeshVertex; VERTICES_PER_FACE] {
        &CUBE_FACES[self as usize]
    }
}

const fn v(x: f32, y: f32, z: f32, u: f32, w: f32) -> MeshVertex {
    MeshVertex::new([x, y, z], [u, w])
}

/// Counter-clockwise quads of the unit cube, indexed by [`BlockFace`].
const CUBE_FACES: [[MeshVertex; VERTICES_PER_FACE]; 6] = [
    // Front (z = 1)
    [
        v(0.0, 0.0, 1.0, 0.0, 0.0),
        v(1.0, 0.0, 1.0, 1.0, 0.0),
        v(1.0, 1.0, 1.0, 1.0, 1.0),
        v(1.0, 1.0, 1.0, 1.0, 1.0),
        v(0.0, 1.0, 1.0, 0.0, 1.0),
        v(0.0, 0.0, 1.0, 0.0, 0.0),
    ],
    // Back (z = 0)
    [
        v(1.0, 0.0, 0.0, 0.0, 0.0),
        v(0.0, 0.0, 0.0, 1.0, 0.0),
        v(0.0, 1.0, 0.0, 1.0, 1.0),
        v(0.0, 1.0, 0.0, 1.0, 1.0),
        v(1.0, 1.0, 0.0, 0.0, 1.0),
        v(1.0, 0.0, 0.0, 0.0, 0.0),
    ],
    // Left (x = 0)
    [
        v(0.0, 0.0, 0.0, 0.0, 0.0),
        v(0.0, 0.0, 1.0, 1.0, 0.0),
        v(0.0, 1.0, 1.0, 1.0, 1.0),
        v(0.0, 1.0, 1.0, 1.0, 1.0),
        v(0.0, 1.0, 0.0, 0.0, 1.0),
        v(0.0, 0.0, 0.0, 0.0, 0.0),
    ],
    // Right (x = 1)
    [
        v(1.0, 0.0, 1.0, 0.0, 0.0),
        v(1.0, 0.0, 0.0, 1.0, 0.0),
        v(1.0, 1.0, 0.0, 1.0, 1.0),
        v(1.0, 1.0, 0.0, 1.0, 1.0),
        v(1.0, 1.0, 1.0, 0.0, 1.0),
        v(1.0, 0.0, 1.0, 0.0, 0.0),
    ],
    // Top (y = 1)
    [
        v(0.0, 1.0, 1.0, 0.0, 0.0),
        v(1.0, 1.0, 1.0, 1.0, 0.0),
        v(1.0, 1.0, 0.0, 1.0, 1.0),
        v(1.0, 1.0, 0.0, 1.0, 1.0),
        v(0.0, 1.0, 0.0, 0.0, 1.0),
        v(0.0, 1.0, 1.0, 0.0, 0.0),
    ],
    // Bottom (y = 0)
    [
        v(0.0, 0.0, 0.0, 0.0, 0.0),
        v(1.0, 0.0, 0.0, 1.0, 0.0),
        v(1.0, 0.0, 1.0, 1.0, 1.0),
        v(1.0, 0.0, 1.0, 1.0, 1.0),
        v(0.0, 0.0, 1.0, 0.0, 1.0),
        v(0.0, 0.0, 0.0, 0.0, 0.0),
    ],
];

/// Build the chunk-local triangle list for a chunk.
///
/// Blocks are visited in storage order (Y slabs, then Z rows, then X), so the
/// output is fully determined by the block contents.
pub fn build_chunk_mesh(chunk: &Chunk) -> Vec<MeshVertex> {
    let mut vertices = Vec::new();

    for index in 0..CHUNK_VOLUME {
        let local = LocalPos::from_index(index);
        let block = chunk.block(local);
        if block.is_air() {
            continue;
        }

        let pos = local.to_ivec3();
        for face in BlockFace::ALL {
            let neighbor = pos + face.normal();
            if !chunk.is_solid(neighbor.x, neighbor.y, neighbor.z) {
                emit_face(&mut vertices, block, face, pos);
            }
        }
    }

    vertices
}

fn emit_face(out: &mut Vec<MeshVertex>, block: BlockId, face: BlockFace, pos: IVec3) {
    let tile = atlas_tile(block, face);
    let offset = pos.as_vec3();
    out.extend(face.template().iter().map(|corner| {
        let [x, y, z] = corner.position;
        MeshVertex::new(
            [x + offset.x, y + offset.y, z + offset.z],
            tile.uv(corner.uv),
        )
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use burden_core::constants::CHUNK_SIZE;

    const FULL_CUBE: usize = 6 * VERTICES_PER_FACE;

    #[test]
    fn empty_chunk_has_no_vertices() {
        assert!(build_chunk_mesh(&Chunk::new()).is_empty());
    }

    #[test]
    fn isolated_block_emits_all_faces() {
        let mut chunk = Chunk::new();
        chunk.set_block(16, 16, 16, BlockId::STONE);
        let mesh = build_chunk_mesh(&chunk);
        assert_eq!(mesh.len(), FULL_CUBE);

        for vertex in &mesh {
            for (axis, coord) in vertex.position.iter().enumerate() {
                assert!(
                    (16.0..=17.0).contains(coord),
                    "axis {axis} out of block bounds: {coord}"
                );
            }
        }
    }

    #[test]
    fn buried_block_emits_nothing() {
        let mut chunk = Chunk::new();
        for y in 9..=11 {
            for z in 9..=11 {
                for x in 9..=11 {
                    chunk.set_block(x, y, z, BlockId::DIRT);
                }
            }
        }
        // 3x3x3 cube: only the outer shell is visible, 9 quads per side
        assert_eq!(build_chunk_mesh(&chunk).len(), 6 * 9 * VERTICES_PER_FACE);

        // Remove the shell and the center becomes a lone cube again
        for y in 9..=11 {
            for z in 9..=11 {
                for x in 9..=11 {
                    if (x, y, z) != (10, 10, 10) {
                        chunk.set_block(x, y, z, BlockId::AIR);
                    }
                }
            }
        }
        assert_eq!(build_chunk_mesh(&chunk).len(), FULL_CUBE);
    }

    #[test]
    fn adjacent_blocks_share_no_faces() {
        let mut chunk = Chunk::new();
        chunk.set_block(4, 4, 4, BlockId::STONE);
        chunk.set_block(5, 4, 4, BlockId::STONE);
        assert_eq!(build_chunk_mesh(&chunk).len(), 10 * VERTICES_PER_FACE);
    }

    #[test]
    fn boundary_faces_are_emitted() {
        let mut chunk = Chunk::new();
        let max = CHUNK_SIZE as i32 - 1;
        chunk.set_block(0, 0, 0, BlockId::GRASS);
        chunk.set_block(max, max, max, BlockId::GRASS);
        assert_eq!(build_chunk_mesh(&chunk).len(), 2 * FULL_CUBE);
    }

    #[test]
    fn full_chunk_only_shows_its_shell() {
        let mut chunk = Chunk::new();
        chunk.fill(BlockId::STONE);
        let per_side = CHUNK_SIZE * CHUNK_SIZE;
        assert_eq!(
            build_chunk_mesh(&chunk).len(),
            6 * per_side * VERTICES_PER_FACE
        );
    }

    #[test]
    fn face_normals_are_unit_axes() {
        for face in BlockFace::ALL {
            let n = face.normal();
            assert_eq!(n.abs().element_sum(), 1);
            assert_eq!(BlockFace::ALL[face.index()], face);
        }
    }

    #[test]
    fn templates_lie_on_their_face_plane() {
        for face in BlockFace::ALL {
            let n = face.normal();
            let axis = (0..3).find(|&a| n[a] != 0).unwrap();
            let plane = if n[axis] > 0 { 1.0 } else { 0.0 };
            for corner in face.template() {
                assert_eq!(corner.position[axis], plane, "{face:?}");
            }
        }
    }

    #[test]
    fn meshing_is_deterministic() {
        let mut chunk = Chunk::new();
        for i in 0..20 {
            chunk.set_block(i, i % 7, (i * 3) % 32, BlockId::DIRT);
        }
        assert_eq!(build_chunk_mesh(&chunk), build_chunk_mesh(&chunk));
    }
}
