//! Fixed texture-atlas lookup.
//!
//! The atlas is a single 256×256 image cut into 16×16-pixel tiles. Tiles are
//! addressed by (row, column) in image space, with row 0 at the top of the
//! image; texture coordinates have their origin at the bottom, so rows are
//! flipped when converting to UVs.

use burden_core::BlockId;

use crate::meshing::BlockFace;

/// Atlas image edge length in pixels.
pub const ATLAS_SIZE_PX: f32 = 256.0;
/// Tile edge length in pixels.
pub const TILE_SIZE_PX: f32 = 16.0;
/// Tiles per atlas row and column.
pub const ATLAS_ROWS: u8 = 16;
/// UV extent of a single tile.
pub const UV_STEP: f32 = TILE_SIZE_PX / ATLAS_SIZE_PX;

/// A tile position in the atlas image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AtlasTile {
    pub row: u8,
    pub col: u8,
}

impl AtlasTile {
    /// Magenta checkerboard shown for blocks without a texture.
    pub const ERROR: Self = Self::new(9, 9);

    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Map a local face coordinate in `[0, 1]²` into this tile's UV rectangle.
    #[inline]
    pub fn uv(self, local: [f32; 2]) -> [f32; 2] {
        let flipped_row = f32::from(ATLAS_ROWS - 1 - self.row);
        [
            f32::from(self.col) * UV_STEP + local[0] * UV_STEP,
            flipped_row * UV_STEP + local[1] * UV_STEP,
        ]
    }
}

/// Per-block tiles for the top, bottom and side faces.
#[derive(Clone, Copy, Debug)]
struct BlockTiles {
    top: AtlasTile,
    bottom: AtlasTile,
    side: AtlasTile,
}

impl BlockTiles {
    const fn uniform(tile: AtlasTile) -> Self {
        Self {
            top: tile,
            bottom: tile,
            side: tile,
        }
    }
}

/// Indexed by block id. Air has no texture and falls through to the error tile.
const BLOCK_TILES: [Option<BlockTiles>; 4] = [
    None,
    Some(BlockTiles {
        top: AtlasTile::new(12, 12),
        bottom: AtlasTile::new(0, 2),
        side: AtlasTile::new(0, 3),
    }),
    Some(BlockTiles::uniform(AtlasTile::new(0, 2))),
    Some(BlockTiles::uniform(AtlasTile::new(0, 1))),
];

/// Atlas tile for one face of a block type.
pub fn atlas_tile(block: BlockId, face: BlockFace) -> AtlasTile {
    let Some(Some(tiles)) = BLOCK_TILES.get(usize::from(block.0)) else {
        return AtlasTile::ERROR;
    };
    match face {
        BlockFace::Top => tiles.top,
        BlockFace::Bottom => tiles.bottom,
        _ => tiles.side,
    }
}
