//! Point-sampled player collision.
//!
//! The player hitbox is approximated by twelve points: the four corners of its
//! footprint at feet, waist and head height. This is cheaper than a swept AABB
//! and can tunnel through thin obstacles at high speed.

use burden_core::VoxelQuery;
use glam::Vec3;

use crate::config::PhysicsConfig;

/// The twelve sample points for a player whose feet are at `feet`.
pub fn sample_points(feet: Vec3, config: &PhysicsConfig) -> [Vec3; 12] {
    let w = config.half_width;
    let corners = [(-w, -w), (w, -w), (-w, w), (w, w)];
    let heights = [config.feet_offset, config.waist_offset, config.head_offset()];

    let mut points = [Vec3::ZERO; 12];
    for (ring, &height) in heights.iter().enumerate() {
        for (corner, &(dx, dz)) in corners.iter().enumerate() {
            points[ring * 4 + corner] = feet + Vec3::new(dx, height, dz);
        }
    }
    points
}

/// True if any sample point lies inside a solid block.
pub fn check_collision<W: VoxelQuery + ?Sized>(
    world: &W,
    feet: Vec3,
    config: &PhysicsConfig,
) -> bool {
    sample_points(feet, config)
        .into_iter()
        .any(|p| world.is_solid_at(p))
}
