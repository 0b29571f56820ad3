//! Edge-tracked button state.

/// State of a key, mouse button or action.
///
/// `Just*` states last for exactly one frame; [`ButtonState::end_frame`]
/// settles them into `Pressed` / `Released`. Repeated presses while held
/// (key repeat) do not produce a new edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// Went down this frame.
    JustPressed,
    /// Held since an earlier frame.
    Pressed,
    /// Went up this frame.
    JustReleased,
    /// Up since an earlier frame.
    #[default]
    Released,
}

impl ButtonState {
    /// Down, whether or not it went down this frame.
    #[inline]
    #[must_use]
    pub const fn is_pressed(self) -> bool {
        matches!(self, Self::JustPressed | Self::Pressed)
    }

    /// The press edge, visible for one frame.
    #[inline]
    #[must_use]
    pub const fn is_just_pressed(self) -> bool {
        matches!(self, Self::JustPressed)
    }

    /// The release edge, visible for one frame.
    #[inline]
    #[must_use]
    pub const fn is_just_released(self) -> bool {
        matches!(self, Self::JustReleased)
    }

    /// Enter `JustPressed` unless already down.
    #[inline]
    pub fn press(&mut self) {
        if !self.is_pressed() {
            *self = Self::JustPressed;
        }
    }

    /// Enter `JustReleased` unless already up.
    #[inline]
    pub fn release(&mut self) {
        if self.is_pressed() {
            *self = Self::JustReleased;
        }
    }

    /// Press or release depending on `pressed`.
    #[inline]
    pub fn set(&mut self, pressed: bool) {
        if pressed {
            self.press();
        } else {
            self.release();
        }
    }

    /// Drop this frame's edge.
    #[inline]
    pub fn end_frame(&mut self) {
        *self = match *self {
            Self::JustPressed => Self::Pressed,
            Self::JustReleased => Self::Released,
            other => other,
        };
    }
}
