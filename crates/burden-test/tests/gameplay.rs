//! Full frame loop: input through controller, physics and rendering.

use burden_core::{BlockId, MovementMode};
use burden_game::{Game, GameConfig};
use burden_input::{Action, KeyCode, MouseButton};
use burden_render::CameraConfig;
use burden_world::{HeadlessBackend, MeshBackend, TerrainConfig, WorldConfig};
use glam::{IVec3, Vec2, Vec3};

const DT: f32 = 1.0 / 60.0;

/// 2x2 flat world with grass at y = 4 and the eye 10 blocks up.
fn flat_game() -> Game<HeadlessBackend> {
    let config = GameConfig::default()
        .with_world(WorldConfig::default().with_world_size(2))
        .with_terrain(TerrainConfig::default().with_amplitude(0.0).with_sea_level(4))
        .with_camera(CameraConfig::default().with_position(Vec3::new(16.5, 15.0, 16.5)));
    Game::new(config, HeadlessBackend::new()).expect("valid config")
}

fn run<B: MeshBackend>(game: &mut Game<B>, frames: usize) {
    for _ in 0..frames {
        game.frame(DT);
    }
}

#[test]
fn player_lands_on_terrain() {
    let mut game = flat_game();
    run(&mut game, 180);

    let feet = game.physics().feet(game.camera().position).y;
    assert!((5.0..5.2).contains(&feet), "feet at {feet}");
    assert!(game.physics().is_grounded(game.world(), game.camera()));
}

#[test]
fn holding_toggle_flips_once() {
    let mut game = flat_game();
    game.input_mut().press(KeyCode::KeyC);
    run(&mut game, 10);
    assert_eq!(game.camera().mode, MovementMode::Flying);

    game.input_mut().release(KeyCode::KeyC);
    run(&mut game, 2);
    assert_eq!(game.camera().mode, MovementMode::Flying);

    game.input_mut().press(KeyCode::KeyC);
    run(&mut game, 3);
    assert_eq!(game.camera().mode, MovementMode::Walking);
}

#[test]
fn walking_and_jumping() {
    let mut game = flat_game();
    run(&mut game, 180);
    let start = game.camera().position;

    game.input_mut().press(KeyCode::KeyW);
    run(&mut game, 30);
    game.input_mut().release(KeyCode::KeyW);
    let walked = game.camera().position;
    // Default view faces -Z
    assert!(walked.z < start.z - 4.0);
    assert!((walked.y - start.y).abs() < 0.2);

    game.input_mut().press(KeyCode::Space);
    game.frame(DT);
    game.input_mut().release(KeyCode::Space);
    game.frame(DT);
    assert!(game.camera().position.y > walked.y);
}

#[test]
fn break_and_place_from_above() {
    let mut game = flat_game();
    run(&mut game, 180);
    game.input_mut().press(KeyCode::KeyC);
    game.frame(DT);
    game.input_mut().release(KeyCode::KeyC);

    // Eye at y = 8.5 looking straight down at the grass below
    game.camera_mut().position = Vec3::new(16.5, 8.5, 16.5);
    game.camera_mut().set_orientation(-90.0, -89.0);

    let report = game.frame(DT);
    let target = report.target.expect("ground in reach");
    assert_eq!(target.voxel, IVec3::new(16, 4, 16));
    assert!(report.outline.is_some());

    game.input_mut().press(MouseButton::Left);
    game.frame(DT);
    game.input_mut().release(MouseButton::Left);
    assert_eq!(game.world().get_block(16, 4, 16), BlockId::AIR);

    // Next block down is dirt; place stone on top of it at y = 4
    game.input_mut().press(KeyCode::Digit3);
    game.input_mut().press(MouseButton::Right);
    game.frame(DT);
    game.input_mut().release(MouseButton::Right);
    assert_eq!(game.controller().selected_block(), BlockId::STONE);
    assert_eq!(game.world().get_block(16, 4, 16), BlockId::STONE);
}

#[test]
fn placement_inside_reach_but_too_close_is_refused() {
    let mut game = flat_game();
    game.input_mut().press(KeyCode::KeyC);
    game.frame(DT);
    game.input_mut().release(KeyCode::KeyC);

    // Target cell (16, 5, 16) has its center 1.0 below the eye
    game.camera_mut().position = Vec3::new(16.5, 6.5, 16.5);
    game.camera_mut().set_orientation(-90.0, -89.0);
    game.input_mut().press(MouseButton::Right);
    game.frame(DT);

    assert_eq!(game.world().get_block(16, 5, 16), BlockId::AIR);
}

#[test]
fn mouse_look_turns_the_camera() {
    let mut game = flat_game();
    let yaw = game.camera().yaw;

    game.input_mut().cursor_moved(Vec2::new(400.0, 300.0));
    game.frame(DT);
    assert_eq!(game.camera().yaw, yaw);

    game.input_mut().cursor_moved(Vec2::new(500.0, 300.0));
    game.frame(DT);
    approx::assert_relative_eq!(game.camera().yaw, yaw + 10.0, epsilon = 1e-4);
    assert!(!game.input().is_pressed(Action::MoveForward));
}

#[test]
fn frames_draw_all_nearby_chunks() {
    let mut game = flat_game();
    let report = game.frame(DT);
    assert_eq!(report.chunks_drawn, 4);

    game.set_render_distance(1);
    assert_eq!(game.frame(DT).chunks_drawn, 1);

    let stats = game.world().backend().stats();
    assert_eq!(stats.created, 4);
    assert_eq!(stats.draws, 5);
}
