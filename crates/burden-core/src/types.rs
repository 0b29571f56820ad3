//! Core voxel types.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Identifier for a block type.
///
/// Block ID 0 is reserved for air (empty space). Any other value is solid.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct BlockId(pub u8);

impl BlockId {
    /// Air block (empty space)
    pub const AIR: Self = Self(0);
    /// Grass block
    pub const GRASS: Self = Self(1);
    /// Dirt block
    pub const DIRT: Self = Self(2);
    /// Stone block
    pub const STONE: Self = Self(3);

    /// Returns true if this block is air (empty)
    #[inline]
    pub const fn is_air(self) -> bool {
        self.0 == 0
    }

    /// Returns true if this block is solid (not air)
    #[inline]
    pub const fn is_solid(self) -> bool {
        self.0 != 0
    }
}

impl From<u8> for BlockId {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

/// How the player body moves through the world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementMode {
    /// Gravity and collision apply.
    #[default]
    Walking,
    /// Free camera flight; physics leaves the body alone.
    Flying,
}

impl MovementMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Walking => Self::Flying,
            Self::Flying => Self::Walking,
        }
    }

    #[inline]
    pub const fn is_flying(self) -> bool {
        matches!(self, Self::Flying)
    }
}
