//! DDA voxel raycasting.

use burden_core::VoxelQuery;
use glam::{IVec3, Vec3};

/// Stand-in for an infinite per-axis step when a direction component is zero.
const NO_CROSSING: f32 = 1e30;

/// Hard cap on voxel steps for unbounded or very long rays.
const MAX_STEPS: u32 = 1 << 18;

/// Outcome of a voxel raycast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastResult {
    pub hit: bool,
    /// The solid voxel that was hit.
    pub voxel: IVec3,
    /// Outward normal of the face the ray entered through.
    pub normal: IVec3,
    /// Ray distance to the entered face.
    pub distance: f32,
}

impl RaycastResult {
    pub const MISS: Self = Self {
        hit: false,
        voxel: IVec3::ZERO,
        normal: IVec3::ZERO,
        distance: 0.0,
    };

    /// The empty cell in front of the hit face, where a new block would go.
    #[inline]
    pub fn place_target(&self) -> Option<IVec3> {
        self.hit.then(|| self.voxel + self.normal)
    }
}

/// Walk the voxel grid from `origin` along `direction`.
///
/// The voxel containing the origin is never tested. Each iteration steps into
/// the neighbor on the axis with the smallest side distance and reports a hit
/// if that voxel is solid. X is stepped only when strictly smallest, then Y
/// when strictly below Z, otherwise Z. An X/Y tie therefore steps Y, which
/// keeps hits on exact voxel edges deterministic.
///
/// The loop stops once the entry distance of the last visited voxel reaches
/// `max_distance`, or after as many steps as the ray can cross boundaries
/// within that distance, capped for unbounded rays. A zero direction never hits,
/// and neither does a ray that would step past the `i32` voxel range.
pub fn raycast<W: VoxelQuery + ?Sized>(
    world: &W,
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
) -> RaycastResult {
    if direction == Vec3::ZERO || !direction.is_finite() || !origin.is_finite() {
        return RaycastResult::MISS;
    }

    let mut voxel = origin.floor().as_ivec3();
    let step = IVec3::new(
        axis_step(direction.x),
        axis_step(direction.y),
        axis_step(direction.z),
    );
    let delta = Vec3::new(
        axis_delta(direction.x),
        axis_delta(direction.y),
        axis_delta(direction.z),
    );
    let mut side = Vec3::new(
        first_crossing(origin.x, voxel.x, direction.x, delta.x),
        first_crossing(origin.y, voxel.y, direction.y, delta.y),
        first_crossing(origin.z, voxel.z, direction.z, delta.z),
    );

    let mut distance = 0.0;
    for _ in 0..step_budget(direction, max_distance) {
        if distance >= max_distance {
            break;
        }
        let axis = if side.x < side.y && side.x < side.z {
            0
        } else if side.y < side.z {
            1
        } else {
            2
        };

        let Some(next) = voxel[axis].checked_add(step[axis]) else {
            return RaycastResult::MISS;
        };
        voxel[axis] = next;
        side[axis] += delta[axis];
        distance = side[axis] - delta[axis];

        if world.block(voxel).is_solid() {
            let mut normal = IVec3::ZERO;
            normal[axis] = -step[axis];
            return RaycastResult {
                hit: true,
                voxel,
                normal,
                distance,
            };
        }
    }

    RaycastResult::MISS
}

/// Boundary crossings within `max_distance`, plus one per axis for the
/// partial voxel the origin sits in and one for the voxel entered past the
/// limit.
fn step_budget(direction: Vec3, max_distance: f32) -> u32 {
    let crossings = (max_distance * direction.abs().element_sum()).ceil();
    if crossings.is_finite() && crossings < MAX_STEPS as f32 {
        crossings.max(0.0) as u32 + 4
    } else {
        MAX_STEPS
    }
}

#[inline]
fn axis_step(d: f32) -> i32 {
    if d > 0.0 {
        1
    } else {
        -1
    }
}

#[inline]
fn axis_delta(d: f32) -> f32 {
    if d == 0.0 {
        NO_CROSSING
    } else {
        (1.0 / d).abs()
    }
}

#[inline]
fn first_crossing(origin: f32, voxel: i32, d: f32, delta: f32) -> f32 {
    if d < 0.0 {
        (origin - voxel as f32) * delta
    } else {
        (voxel as f32 + 1.0 - origin) * delta
    }
}
