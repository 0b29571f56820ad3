//! Frame orchestration.

use burden_core::Result;
use burden_input::{InputManager, MouseLook};
use burden_physics::{Physics, RaycastResult};
use burden_render::{outline_transform, Camera};
use burden_world::{MeshBackend, TerrainGenerator, VoxelWorld};
use glam::Mat4;
use tracing::info;

use crate::config::GameConfig;
use crate::controller::PlayerController;

/// What a frame did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Chunks that issued a draw call.
    pub chunks_drawn: usize,
    /// The block under the crosshair, if any.
    pub target: Option<RaycastResult>,
    /// Model matrix for the selection outline around `target`.
    pub outline: Option<Mat4>,
}

/// The whole simulation: world, player and input.
pub struct Game<B: MeshBackend> {
    world: VoxelWorld<B>,
    physics: Physics,
    camera: Camera,
    controller: PlayerController,
    input: InputManager,
    mouse_look: MouseLook,
    render_distance: i32,
    frame_number: u64,
}

impl<B: MeshBackend> Game<B> {
    /// Validate the configuration and generate the world.
    pub fn new(config: GameConfig, backend: B) -> Result<Self> {
        config.validate()?;
        let terrain = TerrainGenerator::new(config.terrain);
        let render_distance = config.world.render_distance;
        let world = VoxelWorld::new(config.world, &terrain, backend)?;

        info!(
            "game ready, player at {}, render distance {render_distance}",
            config.camera.position
        );

        Ok(Self {
            world,
            physics: Physics::new(config.physics),
            camera: Camera::new(&config.camera),
            controller: PlayerController::new(config.controller),
            input: InputManager::default(),
            mouse_look: MouseLook::new(),
            render_distance,
            frame_number: 0,
        })
    }

    /// Run one frame of `dt` seconds.
    ///
    /// Order: mouse look, controller, gravity, target selection, draw.
    /// Input edges are consumed at the end of the frame.
    pub fn frame(&mut self, dt: f32) -> FrameReport {
        self.mouse_look.apply(&self.input, &mut self.camera);
        self.controller.update(
            &self.input,
            dt,
            &mut self.world,
            &mut self.physics,
            &mut self.camera,
        );
        self.physics.step(dt, &self.world, &mut self.camera);

        let hit = self.controller.target(&self.world, &self.camera);
        let target = hit.hit.then_some(hit);
        let outline = target.map(|t| outline_transform(t.voxel));

        let chunks_drawn = self.world.render(self.camera.position, self.render_distance);

        self.input.end_frame();
        self.frame_number += 1;

        FrameReport {
            chunks_drawn,
            target,
            outline,
        }
    }

    pub const fn world(&self) -> &VoxelWorld<B> {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut VoxelWorld<B> {
        &mut self.world
    }

    pub const fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub const fn physics(&self) -> &Physics {
        &self.physics
    }

    pub const fn controller(&self) -> &PlayerController {
        &self.controller
    }

    pub const fn input(&self) -> &InputManager {
        &self.input
    }

    /// Feed events or scripted presses here between frames.
    pub fn input_mut(&mut self) -> &mut InputManager {
        &mut self.input
    }

    pub fn mouse_look_mut(&mut self) -> &mut MouseLook {
        &mut self.mouse_look
    }

    pub const fn render_distance(&self) -> i32 {
        self.render_distance
    }

    pub fn set_render_distance(&mut self, render_distance: i32) {
        self.render_distance = render_distance.max(0);
    }

    /// Frames completed so far.
    pub const fn frame_number(&self) -> u64 {
        self.frame_number
    }
}

impl<B: MeshBackend> std::fmt::Debug for Game<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("world", &self.world)
            .field("camera", &self.camera.position)
            .field("mode", &self.camera.mode)
            .field("frame_number", &self.frame_number)
            .finish_non_exhaustive()
    }
}
