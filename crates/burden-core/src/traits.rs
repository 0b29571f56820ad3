//! Seams between the world, physics and camera.

use glam::{IVec3, Vec3};

use crate::types::{BlockId, MovementMode};

/// Read-only block access used by physics and raycasting.
///
/// Implementations must be total: any coordinate outside the world yields
/// [`BlockId::AIR`] instead of an error.
pub trait VoxelQuery {
    fn block_at(&self, x: i32, y: i32, z: i32) -> BlockId;

    #[inline]
    fn block(&self, pos: IVec3) -> BlockId {
        self.block_at(pos.x, pos.y, pos.z)
    }

    /// Solidity of the voxel containing a continuous point.
    #[inline]
    fn is_solid_at(&self, point: Vec3) -> bool {
        self.block(point.floor().as_ivec3()).is_solid()
    }
}

impl<T: VoxelQuery + ?Sized> VoxelQuery for &T {
    fn block_at(&self, x: i32, y: i32, z: i32) -> BlockId {
        (**self).block_at(x, y, z)
    }
}

/// Something physics can move: an eye-height position plus a movement mode.
///
/// The position is the viewpoint; the feet sit `player_height` below it.
pub trait Body {
    fn position(&self) -> Vec3;

    fn set_position(&mut self, position: Vec3);

    fn movement_mode(&self) -> MovementMode;
}
