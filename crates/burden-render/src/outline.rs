//! Wireframe box drawn around the targeted block.

use glam::{IVec3, Mat4, Vec3};

/// Scale applied to the unit box so its lines sit just outside the block faces.
pub const OUTLINE_SCALE: f32 = 1.002;
/// Pre-scale offset that keeps the enlarged box centered on the block.
pub const OUTLINE_INSET: f32 = -0.001;

/// The twelve edges of the unit cube as a line list (24 endpoints).
#[rustfmt::skip]
pub const BOX_LINES: [[f32; 3]; 24] = [
    // z = 0 face
    [0.0, 0.0, 0.0], [1.0, 0.0, 0.0],
    [1.0, 0.0, 0.0], [1.0, 1.0, 0.0],
    [1.0, 1.0, 0.0], [0.0, 1.0, 0.0],
    [0.0, 1.0, 0.0], [0.0, 0.0, 0.0],
    // z = 1 face
    [0.0, 0.0, 1.0], [1.0, 0.0, 1.0],
    [1.0, 0.0, 1.0], [1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0], [0.0, 1.0, 1.0],
    [0.0, 1.0, 1.0], [0.0, 0.0, 1.0],
    // connecting edges
    [0.0, 0.0, 0.0], [0.0, 0.0, 1.0],
    [1.0, 0.0, 0.0], [1.0, 0.0, 1.0],
    [1.0, 1.0, 0.0], [1.0, 1.0, 1.0],
    [0.0, 1.0, 0.0], [0.0, 1.0, 1.0],
];

/// Model matrix placing [`BOX_LINES`] around `voxel`.
pub fn outline_transform(voxel: IVec3) -> Mat4 {
    Mat4::from_translation(voxel.as_vec3())
        * Mat4::from_scale(Vec3::splat(OUTLINE_SCALE))
        * Mat4::from_translation(Vec3::splat(OUTLINE_INSET))
}
