//! Per-frame player control.

use burden_core::{BlockId, MovementMode};
use burden_input::{Action, InputManager};
use burden_physics::{Physics, RaycastResult};
use burden_render::{Camera, CameraMovement};
use burden_world::{MeshBackend, VoxelWorld};
use glam::{IVec3, Vec3};
use tracing::{debug, info};

use crate::config::ControllerConfig;

const HOTBAR: [(Action, BlockId); 3] = [
    (Action::Hotbar1, BlockId::GRASS),
    (Action::Hotbar2, BlockId::DIRT),
    (Action::Hotbar3, BlockId::STONE),
];

const FLIGHT: [(Action, CameraMovement); 6] = [
    (Action::MoveForward, CameraMovement::Forward),
    (Action::MoveBack, CameraMovement::Backward),
    (Action::MoveLeft, CameraMovement::Left),
    (Action::MoveRight, CameraMovement::Right),
    (Action::FlyUp, CameraMovement::Up),
    (Action::FlyDown, CameraMovement::Down),
];

/// Turns input into movement and block edits.
///
/// Holds only its own state (tuning and the selected block). The world,
/// physics and camera are borrowed for the duration of each update.
#[derive(Debug, Clone)]
pub struct PlayerController {
    config: ControllerConfig,
    selected: BlockId,
}

impl PlayerController {
    pub const fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            selected: BlockId::GRASS,
        }
    }

    pub const fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Block placed by [`Action::Place`].
    pub const fn selected_block(&self) -> BlockId {
        self.selected
    }

    pub fn select_block(&mut self, block: BlockId) {
        self.selected = block;
    }

    /// Apply one frame of input. Gravity is not integrated here; see
    /// [`Physics::step`].
    pub fn update<B: MeshBackend>(
        &mut self,
        input: &InputManager,
        dt: f32,
        world: &mut VoxelWorld<B>,
        physics: &mut Physics,
        camera: &mut Camera,
    ) {
        if input.is_just_pressed(Action::ToggleFly) {
            let mode = camera.toggle_mode();
            match mode {
                MovementMode::Flying => info!("flying enabled"),
                MovementMode::Walking => info!("flying disabled"),
            }
        }

        for (action, block) in HOTBAR {
            if input.is_just_pressed(action) && self.selected != block {
                self.selected = block;
                debug!("selected block {}", block.0);
            }
        }

        if camera.is_flying() {
            for (action, movement) in FLIGHT {
                if input.is_pressed(action) {
                    camera.process_keyboard(movement, dt);
                }
            }
        } else {
            self.walk(input, dt, world, physics, camera);
        }

        if input.is_just_pressed(Action::Break) {
            self.break_block(world, camera);
        }
        if input.is_just_pressed(Action::Place) {
            self.place_block(world, camera);
        }
    }

    fn walk<B: MeshBackend>(
        &self,
        input: &InputManager,
        dt: f32,
        world: &VoxelWorld<B>,
        physics: &mut Physics,
        camera: &mut Camera,
    ) {
        let front = camera.horizontal_front();
        let right = camera.horizontal_right();

        let mut direction = Vec3::ZERO;
        if input.is_pressed(Action::MoveForward) {
            direction += front;
        }
        if input.is_pressed(Action::MoveBack) {
            direction -= front;
        }
        if input.is_pressed(Action::MoveLeft) {
            direction -= right;
        }
        if input.is_pressed(Action::MoveRight) {
            direction += right;
        }

        let mut speed = self.config.walk_speed * dt;
        if input.is_pressed(Action::Sprint) {
            speed *= self.config.sprint_multiplier;
        }
        physics.move_horizontal(direction, speed, world, camera);

        if input.is_pressed(Action::FlyUp) {
            physics.jump(world, &*camera);
        }
    }

    /// The block under the crosshair within reach.
    pub fn target<B: MeshBackend>(&self, world: &VoxelWorld<B>, camera: &Camera) -> RaycastResult {
        burden_physics::raycast(world, camera.position, camera.front, self.config.reach)
    }

    /// Remove the targeted block. Returns the cleared voxel.
    pub fn break_block<B: MeshBackend>(
        &self,
        world: &mut VoxelWorld<B>,
        camera: &Camera,
    ) -> Option<IVec3> {
        let hit = self.target(world, camera);
        if !hit.hit {
            return None;
        }
        let v = hit.voxel;
        world.set_block(v.x, v.y, v.z, BlockId::AIR);
        debug!("broke block at {v}");
        Some(v)
    }

    /// Put the selected block against the targeted face. Returns the filled
    /// voxel, or `None` when nothing is targeted or the new block would sit
    /// within `min_place_distance` of the eye.
    pub fn place_block<B: MeshBackend>(
        &self,
        world: &mut VoxelWorld<B>,
        camera: &Camera,
    ) -> Option<IVec3> {
        let target = self.target(world, camera).place_target()?;
        let center = target.as_vec3() + Vec3::splat(0.5);
        if camera.position.distance(center) <= self.config.min_place_distance {
            debug!("refused to place block at {target}: too close");
            return None;
        }
        world.set_block(target.x, target.y, target.z, self.selected);
        debug!("placed block {} at {target}", self.selected.0);
        Some(target)
    }
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}
