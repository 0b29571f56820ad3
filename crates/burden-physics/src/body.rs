//! Gravity, jumping and horizontal movement for a player body.

use burden_core::{Body, VoxelQuery};
use glam::Vec3;
use tracing::info;

use crate::collision::check_collision;
use crate::config::PhysicsConfig;

/// Player physics state.
///
/// Only vertical velocity persists between frames. Horizontal motion is
/// applied directly as a displacement by [`Physics::move_horizontal`].
/// Bodies in flying mode are left alone by every method here.
#[derive(Debug, Clone)]
pub struct Physics {
    config: PhysicsConfig,
    vertical_velocity: f32,
}

impl Physics {
    pub const fn new(config: PhysicsConfig) -> Self {
        Self {
            config,
            vertical_velocity: 0.0,
        }
    }

    pub const fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Current vertical velocity in blocks/s, positive upward.
    pub const fn velocity(&self) -> f32 {
        self.vertical_velocity
    }

    pub fn set_velocity(&mut self, velocity: f32) {
        self.vertical_velocity = velocity;
    }

    /// Feet position for an eye position.
    #[inline]
    pub fn feet(&self, eye: Vec3) -> Vec3 {
        eye - Vec3::Y * self.config.player_height
    }

    /// Hitbox test for a body whose eye is at `eye`.
    pub fn collides<W: VoxelQuery + ?Sized>(&self, world: &W, eye: Vec3) -> bool {
        check_collision(world, self.feet(eye), &self.config)
    }

    /// Integrate gravity over `dt` seconds.
    ///
    /// A candidate position that collides is rejected and the vertical
    /// velocity is zeroed, which handles both landing and bumping a ceiling.
    /// Falling below the void threshold respawns the body.
    pub fn step<W, B>(&mut self, dt: f32, world: &W, body: &mut B)
    where
        W: VoxelQuery + ?Sized,
        B: Body + ?Sized,
    {
        if body.movement_mode().is_flying() {
            return;
        }

        self.vertical_velocity -= self.config.gravity * dt;

        let mut candidate = body.position();
        candidate.y += self.vertical_velocity * dt;

        if self.collides(world, candidate) {
            self.vertical_velocity = 0.0;
        } else {
            body.set_position(candidate);
        }

        if body.position().y < self.config.void_threshold {
            info!(
                "fell below y = {}, respawning at {}",
                self.config.void_threshold, self.config.respawn_point
            );
            body.set_position(self.config.respawn_point);
            self.vertical_velocity = 0.0;
        }
    }

    /// Move by `speed` blocks along the horizontal part of `direction`.
    ///
    /// X and Z are applied and rolled back independently, so pushing
    /// diagonally into a wall slides along it.
    pub fn move_horizontal<W, B>(&self, direction: Vec3, speed: f32, world: &W, body: &mut B)
    where
        W: VoxelQuery + ?Sized,
        B: Body + ?Sized,
    {
        if body.movement_mode().is_flying() || direction == Vec3::ZERO {
            return;
        }

        let displacement = direction.normalize_or_zero() * speed;
        let mut position = body.position();

        position.x += displacement.x;
        if self.collides(world, position) {
            position.x = body.position().x;
        }

        position.z += displacement.z;
        if self.collides(world, position) {
            position.z = body.position().z;
        }

        body.set_position(position);
    }

    /// Ground under the feet and no significant vertical motion.
    pub fn is_grounded<W, B>(&self, world: &W, body: &B) -> bool
    where
        W: VoxelQuery + ?Sized,
        B: Body + ?Sized,
    {
        let probe = self.feet(body.position()) - Vec3::Y * self.config.ground_probe;
        check_collision(world, probe, &self.config)
            && self.vertical_velocity.abs() < self.config.grounded_velocity_epsilon
    }

    /// Start a jump if the body is walking and grounded. Returns whether it jumped.
    pub fn jump<W, B>(&mut self, world: &W, body: &B) -> bool
    where
        W: VoxelQuery + ?Sized,
        B: Body + ?Sized,
    {
        if body.movement_mode().is_flying() || !self.is_grounded(world, body) {
            return false;
        }
        self.vertical_velocity = self.config.jump_impulse;
        true
    }
}

impl Default for Physics {
    fn default() -> Self {
        Self::new(PhysicsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use burden_core::{BlockId, MovementMode};
    use burden_world::{HeadlessBackend, VoxelWorld, WorldConfig};

    const DT: f32 = 1.0 / 60.0;

    struct Player {
        position: Vec3,
        mode: MovementMode,
    }

    impl Player {
        fn walking(position: Vec3) -> Self {
            Self {
                position,
                mode: MovementMode::Walking,
            }
        }
    }

    impl Body for Player {
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

    /// A 2x2-chunk world with a stone floor at y = 0.
    fn floor_world() -> VoxelWorld<HeadlessBackend> {
        let mut world =
            VoxelWorld::empty(WorldConfig::default().with_world_size(2), HeadlessBackend::new())
                .unwrap();
        for x in 0..20 {
            for z in 0..20 {
                world.set_block(x, 0, z, BlockId::STONE);
            }
        }
        world
    }

    fn standing_eye(x: f32, z: f32) -> Vec3 {
        Vec3::new(x, 1.0 + PhysicsConfig::default().player_height, z)
    }

    #[test]
    fn resting_on_floor_is_stable() {
        let world = floor_world();
        let mut physics = Physics::default();
        let start = standing_eye(5.5, 5.5);
        let mut player = Player::walking(start);

        for _ in 0..120 {
            physics.step(DT, &world, &mut player);
        }
        assert_eq!(player.position, start);
        assert_eq!(physics.velocity(), 0.0);
    }

    #[test]
    fn falls_and_lands() {
        let world = floor_world();
        let mut physics = Physics::default();
        let mut player = Player::walking(Vec3::new(5.5, 10.0, 5.5));

        physics.step(DT, &world, &mut player);
        assert!(player.position.y < 10.0);
        assert!(physics.velocity() < 0.0);

        for _ in 0..240 {
            physics.step(DT, &world, &mut player);
        }
        let feet = physics.feet(player.position).y;
        assert!((1.0..1.5).contains(&feet), "feet at {feet}");
        assert!(physics.is_grounded(&world, &player));
    }

    #[test]
    fn ceiling_stops_upward_motion() {
        let mut world = floor_world();
        world.set_block(5, 4, 5, BlockId::STONE);
        let mut physics = Physics::default();
        let start = standing_eye(5.5, 5.5);
        let mut player = Player::walking(start);

        assert!(physics.jump(&world, &player));
        let mut peak = start.y;
        for _ in 0..60 {
            physics.step(DT, &world, &mut player);
            peak = peak.max(player.position.y);
        }
        // Head ring must stay below the ceiling block at y = 4
        assert!(physics.feet(Vec3::Y * peak).y + 1.5 < 4.0);
    }

    #[test]
    fn void_respawn() {
        let world = floor_world();
        let mut physics = Physics::default();
        let mut player = Player::walking(Vec3::new(-10.0, -49.9, -10.0));

        physics.set_velocity(-30.0);
        physics.step(DT, &world, &mut player);
        assert_eq!(player.position, PhysicsConfig::default().respawn_point);
        assert_eq!(physics.velocity(), 0.0);
    }

    #[test]
    fn flying_bodies_are_ignored() {
        let world = floor_world();
        let mut physics = Physics::default();
        let start = Vec3::new(5.5, 20.0, 5.5);
        let mut player = Player {
            position: start,
            mode: MovementMode::Flying,
        };

        physics.step(DT, &world, &mut player);
        physics.move_horizontal(Vec3::X, 1.0, &world, &mut player);
        assert!(!physics.jump(&world, &player));
        assert_eq!(player.position, start);
        assert_eq!(physics.velocity(), 0.0);
    }

    #[test]
    fn jump_requires_ground() {
        let world = floor_world();
        let mut physics = Physics::default();

        let airborne = Player::walking(Vec3::new(5.5, 10.0, 5.5));
        assert!(!physics.jump(&world, &airborne));
        assert_eq!(physics.velocity(), 0.0);

        let standing = Player::walking(standing_eye(5.5, 5.5));
        assert!(physics.jump(&world, &standing));
        assert_relative_eq!(physics.velocity(), 8.0);

        // Already rising
        assert!(!physics.jump(&world, &standing));
    }

    #[test]
    fn move_in_open_space() {
        let world = floor_world();
        let physics = Physics::default();
        let mut player = Player::walking(standing_eye(5.5, 5.5));

        physics.move_horizontal(Vec3::new(3.0, 0.0, 4.0), 0.5, &world, &mut player);
        assert_relative_eq!(player.position.x, 5.8, epsilon = 1e-5);
        assert_relative_eq!(player.position.z, 5.9, epsilon = 1e-5);

        let before = player.position;
        physics.move_horizontal(Vec3::ZERO, 1.0, &world, &mut player);
        assert_eq!(player.position, before);
    }

    #[test]
    fn inside_corner_blocks_both_axes() {
        let mut world = floor_world();
        // Walls at x = 6 and z = 6 next to the player at (5.5, 5.5)
        for y in 1..3 {
            for i in 4..8 {
                world.set_block(6, y, i, BlockId::STONE);
                world.set_block(i, y, 6, BlockId::STONE);
            }
        }
        let physics = Physics::default();
        let start = standing_eye(5.5, 5.5);
        let mut player = Player::walking(start);

        physics.move_horizontal(Vec3::new(1.0, 0.0, 1.0), 0.5, &world, &mut player);
        assert_eq!(player.position, start);
    }

    #[test]
    fn wall_slide_keeps_free_axis() {
        let mut world = floor_world();
        for y in 1..3 {
            for z in 0..12 {
                world.set_block(6, y, z, BlockId::STONE);
            }
        }
        let physics = Physics::default();
        let start = standing_eye(5.5, 5.5);
        let mut player = Player::walking(start);

        physics.move_horizontal(Vec3::new(1.0, 0.0, 1.0), 0.5, &world, &mut player);
        assert_eq!(player.position.x, start.x);
        assert!(player.position.z > start.z);
    }
}
