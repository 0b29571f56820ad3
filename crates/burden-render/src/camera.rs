//! First-person camera.
//!
//! The camera doubles as the player body: its position is the eye, and its
//! [`MovementMode`] decides whether physics or free flight moves it.

use burden_core::{Body, Error, MovementMode, Result};
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Pitch limit in degrees, short of straight up/down so the view never flips.
const PITCH_LIMIT: f32 = 89.0;

/// Free-flight directions for [`Camera::process_keyboard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// Camera configuration. Angles are in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Flight speed in blocks per second.
    pub movement_speed: f32,
    /// Degrees of rotation per unit of mouse motion.
    pub mouse_sensitivity: f32,
    /// Vertical field of view.
    pub zoom: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(16.0, 20.0, 40.0),
            // Looking down -Z
            yaw: -90.0,
            pitch: 0.0,
            movement_speed: 10.0,
            mouse_sensitivity: 0.1,
            zoom: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl CameraConfig {
    #[must_use]
    pub const fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub const fn with_orientation(mut self, yaw: f32, pitch: f32) -> Self {
        self.yaw = yaw;
        self.pitch = pitch;
        self
    }

    #[must_use]
    pub const fn with_movement_speed(mut self, movement_speed: f32) -> Self {
        self.movement_speed = movement_speed;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.zoom > 0.0 && self.zoom < 180.0) {
            return Err(Error::InvalidConfig(format!(
                "zoom must be in (0, 180) degrees, got {}",
                self.zoom
            )));
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(Error::InvalidConfig(format!(
                "clip planes must satisfy 0 < near < far, got {} / {}",
                self.near, self.far
            )));
        }
        if !self.position.is_finite() {
            return Err(Error::InvalidConfig("camera position must be finite".into()));
        }
        Ok(())
    }
}

/// Euler-angle camera with a fixed world up.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub front: Vec3,
    pub up: Vec3,
    pub right: Vec3,
    pub world_up: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    pub zoom: f32,
    pub near: f32,
    pub far: f32,
    pub mode: MovementMode,
}

impl Camera {
    pub fn new(config: &CameraConfig) -> Self {
        let mut camera = Self {
            position: config.position,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up: Vec3::Y,
            yaw: config.yaw,
            pitch: config.pitch,
            movement_speed: config.movement_speed,
            mouse_sensitivity: config.mouse_sensitivity,
            zoom: config.zoom,
            near: config.near,
            far: config.far,
            mode: MovementMode::Walking,
        };
        camera.update_vectors();
        camera
    }

    /// Default camera placed at `position`.
    pub fn at(position: Vec3) -> Self {
        Self::new(&CameraConfig::default().with_position(position))
    }

    /// Translate in free flight. Forward follows the full view direction.
    pub fn process_keyboard(&mut self, movement: CameraMovement, dt: f32) {
        let velocity = self.movement_speed * dt;
        let offset = match movement {
            CameraMovement::Forward => self.front,
            CameraMovement::Backward => -self.front,
            CameraMovement::Left => -self.right,
            CameraMovement::Right => self.right,
            CameraMovement::Up => self.world_up,
            CameraMovement::Down => -self.world_up,
        };
        self.position += offset * velocity;
    }

    /// Rotate by a mouse delta. Positive `dy` looks up.
    pub fn process_mouse_movement(&mut self, dx: f32, dy: f32, constrain_pitch: bool) {
        self.yaw += dx * self.mouse_sensitivity;
        self.pitch += dy * self.mouse_sensitivity;
        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
        self.update_vectors();
    }

    /// Set yaw and pitch directly, in degrees.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    fn update_vectors(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();
        self.front = Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }

    /// Walking direction: `front` flattened onto the XZ plane.
    pub fn horizontal_front(&self) -> Vec3 {
        Vec3::new(self.front.x, 0.0, self.front.z).normalize_or_zero()
    }

    /// Strafing direction: `right` flattened onto the XZ plane.
    pub fn horizontal_right(&self) -> Vec3 {
        Vec3::new(self.right.x, 0.0, self.right.z).normalize_or_zero()
    }

    /// Switch between walking and flying. Returns the new mode.
    pub fn toggle_mode(&mut self) -> MovementMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    pub const fn is_flying(&self) -> bool {
        self.mode.is_flying()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.front, self.up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.zoom.to_radians(), aspect, self.near, self.far)
    }

    /// Get camera uniforms for GPU.
    pub fn uniforms(&self, aspect: f32) -> CameraUniforms {
        CameraUniforms {
            view: self.view_matrix().to_cols_array_2d(),
            projection: self.projection_matrix(aspect).to_cols_array_2d(),
            position: self.position.extend(1.0).to_array(),
            direction: self.front.extend(0.0).to_array(),
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}

impl Body for Camera {
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

/// Camera uniform buffer data for GPU.
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniforms {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub position: [f32; 4],
    pub direction: [f32; 4],
}
