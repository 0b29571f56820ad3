//! Physics and raycasting against generated worlds.

use approx::assert_relative_eq;
use burden_core::BlockId;
use burden_physics::{raycast, Physics, PhysicsConfig};
use burden_test::{empty_world, flat_world, single_block_world, TestBody};
use glam::{IVec3, Vec3};

const DT: f32 = 1.0 / 60.0;

#[test]
fn ray_hits_block_face_on() {
    let world = single_block_world(IVec3::ZERO, BlockId::STONE);
    let hit = raycast(&world, Vec3::new(0.5, 0.5, -5.0), Vec3::Z, 10.0);

    assert!(hit.hit);
    assert_eq!(hit.voxel, IVec3::ZERO);
    assert_eq!(hit.normal, IVec3::new(0, 0, -1));
    assert_relative_eq!(hit.distance, 5.0);
    assert_eq!(hit.place_target(), Some(IVec3::new(0, 0, -1)));
}

#[test]
fn ray_through_air_misses() {
    let world = empty_world(2);
    let hit = raycast(&world, Vec3::new(10.5, 10.5, 10.5), Vec3::new(1.0, 0.2, 0.7), 8.0);
    assert!(!hit.hit);
    assert_eq!(hit.place_target(), None);
}

#[test]
fn ray_down_finds_the_surface() {
    let world = flat_world(1, 6);
    let hit = raycast(&world, Vec3::new(8.5, 12.5, 8.5), Vec3::NEG_Y, 20.0);
    assert!(hit.hit);
    assert_eq!(hit.voxel, IVec3::new(8, 6, 8));
    assert_eq!(hit.normal, IVec3::Y);
    assert_relative_eq!(hit.distance, 5.5);
}

#[test]
fn resting_body_stays_put() {
    let world = flat_world(1, 4);
    let mut physics = Physics::default();
    let start = TestBody::standing_on(16.5, 4, 16.5, physics.config());
    let mut body = start;

    for _ in 0..300 {
        physics.step(DT, &world, &mut body);
    }
    assert_eq!(body, start);
    assert!(physics.is_grounded(&world, &body));
}

#[test]
fn jump_only_from_the_ground() {
    let world = flat_world(1, 4);
    let mut physics = Physics::default();

    let airborne = TestBody::walking(Vec3::new(16.5, 20.0, 16.5));
    assert!(!physics.jump(&world, &airborne));
    assert_eq!(physics.velocity(), 0.0);

    let mut body = TestBody::standing_on(16.5, 4, 16.5, physics.config());
    assert!(physics.jump(&world, &body));
    assert_relative_eq!(physics.velocity(), 8.0);

    let ground_eye = body.position.y;
    physics.step(DT, &world, &mut body);
    assert!(body.position.y > ground_eye);

    // Lands again eventually
    for _ in 0..240 {
        physics.step(DT, &world, &mut body);
    }
    assert!(physics.is_grounded(&world, &body));
}

#[test]
fn fall_into_void_respawns() {
    let world = empty_world(1);
    let config = PhysicsConfig::default().with_respawn_point(Vec3::new(4.0, 30.0, 4.0));
    let mut physics = Physics::new(config);
    let mut body = TestBody::walking(Vec3::new(4.0, 10.0, 4.0));

    let mut respawned = false;
    for _ in 0..600 {
        physics.step(DT, &world, &mut body);
        if body.position == Vec3::new(4.0, 30.0, 4.0) {
            respawned = true;
            break;
        }
    }
    assert!(respawned);
    assert_eq!(physics.velocity(), 0.0);
}

/// Flat floor at layer 4 with wall blocks at feet and waist height.
fn walled(walls: &[(i32, i32)]) -> burden_test::TestWorld {
    let mut world = flat_world(1, 4);
    for &(x, z) in walls {
        for y in 5..8 {
            world.set_block(x, y, z, BlockId::STONE);
        }
    }
    world
}

#[test]
fn inside_corner_stops_diagonal_motion() {
    let world = walled(&[(17, 16), (16, 17)]);
    let physics = Physics::default();
    let start = TestBody::standing_on(16.5, 4, 16.5, physics.config());
    let mut body = start;

    physics.move_horizontal(Vec3::new(1.0, 0.0, 1.0), 0.5, &world, &mut body);
    assert_eq!(body.position, start.position);
}

#[test]
fn wall_slide_keeps_free_axis() {
    let world = walled(&[(17, 15), (17, 16), (17, 17)]);
    let physics = Physics::default();
    let start = TestBody::standing_on(16.5, 4, 16.5, physics.config());
    let mut body = start;

    physics.move_horizontal(Vec3::new(1.0, 0.0, 1.0), 0.5, &world, &mut body);
    assert_eq!(body.position.x, start.position.x);
    assert!(body.position.z > start.position.z);
    assert_eq!(body.position.y, start.position.y);
}

#[test]
fn flying_body_is_left_alone() {
    let world = flat_world(1, 4);
    let mut physics = Physics::default();
    let start = TestBody::flying(Vec3::new(16.5, 20.0, 16.5));
    let mut body = start;

    physics.step(DT, &world, &mut body);
    physics.move_horizontal(Vec3::X, 2.0, &world, &mut body);
    assert_eq!(body, start);
}
