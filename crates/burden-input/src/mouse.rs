//! Mouse buttons and first-person mouse look.

use burden_render::Camera;
use glam::Vec2;
use winit::event::MouseButton as WinitMouseButton;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
}

impl TryFrom<WinitMouseButton> for MouseButton {
    type Error = ();

    fn try_from(button: WinitMouseButton) -> Result<Self, Self::Error> {
        match button {
            WinitMouseButton::Left => Ok(Self::Left),
            WinitMouseButton::Right => Ok(Self::Right),
            WinitMouseButton::Middle => Ok(Self::Middle),
            WinitMouseButton::Back => Ok(Self::Back),
            WinitMouseButton::Forward => Ok(Self::Forward),
            WinitMouseButton::Other(_) => Err(()),
        }
    }
}

/// Turns absolute cursor positions into camera rotation.
///
/// The first sample only establishes a reference point, so capturing the
/// cursor does not snap the view. Window Y grows downward, so it is inverted
/// before it reaches the camera.
#[derive(Debug, Clone)]
pub struct MouseLook {
    last: Option<Vec2>,
    constrain_pitch: bool,
}

impl MouseLook {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: None,
            constrain_pitch: true,
        }
    }

    #[must_use]
    pub const fn with_constrain_pitch(mut self, constrain_pitch: bool) -> Self {
        self.constrain_pitch = constrain_pitch;
        self
    }

    /// Feed one cursor position. Returns the applied offset (x right, y up).
    pub fn on_cursor(&mut self, position: Vec2, camera: &mut Camera) -> Vec2 {
        let last = self.last.replace(position).unwrap_or(position);
        let offset = Vec2::new(position.x - last.x, last.y - position.y);
        if offset != Vec2::ZERO {
            camera.process_mouse_movement(offset.x, offset.y, self.constrain_pitch);
        }
        offset
    }

    /// Apply every cursor sample recorded this frame.
    pub fn apply(&mut self, input: &crate::InputManager, camera: &mut Camera) {
        for &position in input.cursor_positions() {
            self.on_cursor(position, camera);
        }
    }

    /// Forget the reference point, e.g. after the cursor was released.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

impl Default for MouseLook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn first_sample_is_suppressed() {
        let mut look = MouseLook::new();
        let mut camera = Camera::default();
        let yaw = camera.yaw;

        let offset = look.on_cursor(Vec2::new(900.0, 100.0), &mut camera);
        assert_eq!(offset, Vec2::ZERO);
        assert_eq!(camera.yaw, yaw);
    }

    #[test]
    fn y_is_inverted() {
        let mut look = MouseLook::new();
        let mut camera = Camera::default();
        look.on_cursor(Vec2::new(640.0, 360.0), &mut camera);

        // Moving the cursor up the screen looks up
        let offset = look.on_cursor(Vec2::new(650.0, 340.0), &mut camera);
        assert_eq!(offset, Vec2::new(10.0, 20.0));
        assert_relative_eq!(camera.yaw, -89.0, epsilon = 1e-4);
        assert_relative_eq!(camera.pitch, 2.0, epsilon = 1e-4);
    }

    #[test]
    fn reset_re_arms_suppression() {
        let mut look = MouseLook::new();
        let mut camera = Camera::default();
        look.on_cursor(Vec2::ZERO, &mut camera);
        look.reset();
        assert_eq!(look.on_cursor(Vec2::new(500.0, 500.0), &mut camera), Vec2::ZERO);
    }

    #[test]
    fn other_buttons_are_ignored() {
        assert_eq!(MouseButton::try_from(WinitMouseButton::Left), Ok(MouseButton::Left));
        assert!(MouseButton::try_from(WinitMouseButton::Other(9)).is_err());
    }
}
