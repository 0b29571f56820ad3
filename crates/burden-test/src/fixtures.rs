//! World and body fixtures.

use burden_core::{BlockId, Body, MovementMode};
use burden_physics::PhysicsConfig;
use burden_world::{HeadlessBackend, TerrainConfig, TerrainGenerator, VoxelWorld, WorldConfig};
use glam::{IVec3, Vec3};

/// World type produced by every fixture.
pub type TestWorld = VoxelWorld<HeadlessBackend>;

/// All-air world of `size × size` chunks.
///
/// # Panics
///
/// If `size` is not a valid world size.
pub fn empty_world(size: i32) -> TestWorld {
    VoxelWorld::empty(
        WorldConfig::default().with_world_size(size),
        HeadlessBackend::new(),
    )
    .expect("valid world size")
}

/// Flat terrain: grass at `surface`, two dirt layers, stone below.
///
/// # Panics
///
/// If `size` is not a valid world size.
pub fn flat_world(size: i32, surface: i32) -> TestWorld {
    let terrain = TerrainGenerator::new(
        TerrainConfig::default()
            .with_amplitude(0.0)
            .with_sea_level(surface),
    );
    VoxelWorld::new(
        WorldConfig::default().with_world_size(size),
        &terrain,
        HeadlessBackend::new(),
    )
    .expect("valid world size")
}

/// One-chunk air world holding a single block.
pub fn single_block_world(pos: IVec3, block: BlockId) -> TestWorld {
    let mut world = empty_world(1);
    world.set_block(pos.x, pos.y, pos.z, block);
    world
}

/// Minimal [`Body`] for physics tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestBody {
    pub position: Vec3,
    pub mode: MovementMode,
}

impl TestBody {
    pub const fn walking(eye: Vec3) -> Self {
        Self {
            position: eye,
            mode: MovementMode::Walking,
        }
    }

    pub const fn flying(eye: Vec3) -> Self {
        Self {
            position: eye,
            mode: MovementMode::Flying,
        }
    }

    /// Walking body whose feet rest exactly on the top face of layer `ground_y`.
    pub fn standing_on(x: f32, ground_y: i32, z: f32, config: &PhysicsConfig) -> Self {
        let feet = (ground_y + 1) as f32;
        Self::walking(Vec3::new(x, feet + config.player_height, z))
    }

    pub fn feet(&self, config: &PhysicsConfig) -> Vec3 {
        self.position - Vec3::Y * config.player_height
    }
}

impl Body for TestBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn movement_mode(&self) -> MovementMode {
        self.mode
    }
}
