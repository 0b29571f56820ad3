//! Physics tuning.

use burden_core::{Error, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Physics configuration.
///
/// Heights are measured upward from the player's feet, which sit
/// `player_height` below the eye position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Downward acceleration in blocks/s².
    pub gravity: f32,
    /// Vertical velocity set by a jump, in blocks/s.
    pub jump_impulse: f32,
    /// Eye height above the feet.
    pub player_height: f32,
    /// Half of the hitbox footprint on X and Z.
    pub half_width: f32,
    /// Height of the lowest ring of collision samples.
    pub feet_offset: f32,
    /// Height of the middle ring of collision samples.
    pub waist_offset: f32,
    /// Distance of the top sample ring below the eye.
    pub head_clearance: f32,
    /// How far below the feet the ground probe looks.
    pub ground_probe: f32,
    /// Largest vertical speed that still counts as standing.
    pub grounded_velocity_epsilon: f32,
    /// Eye heights below this trigger a respawn.
    pub void_threshold: f32,
    /// Eye position after falling out of the world.
    pub respawn_point: Vec3,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 18.0,
            jump_impulse: 8.0,
            player_height: 1.7,
            half_width: 0.3,
            feet_offset: 0.0,
            waist_offset: 0.8,
            head_clearance: 0.2,
            ground_probe: 0.1,
            grounded_velocity_epsilon: 0.1,
            void_threshold: -50.0,
            respawn_point: Vec3::new(16.0, 60.0, 16.0),
        }
    }
}

impl PhysicsConfig {
    #[must_use]
    pub const fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    #[must_use]
    pub const fn with_jump_impulse(mut self, jump_impulse: f32) -> Self {
        self.jump_impulse = jump_impulse;
        self
    }

    #[must_use]
    pub const fn with_player_height(mut self, player_height: f32) -> Self {
        self.player_height = player_height;
        self
    }

    #[must_use]
    pub const fn with_half_width(mut self, half_width: f32) -> Self {
        self.half_width = half_width;
        self
    }

    #[must_use]
    pub const fn with_respawn_point(mut self, respawn_point: Vec3) -> Self {
        self.respawn_point = respawn_point;
        self
    }

    /// Height of the top sample ring above the feet.
    #[inline]
    pub fn head_offset(&self) -> f32 {
        self.player_height - self.head_clearance
    }

    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("gravity", self.gravity, self.gravity >= 0.0),
            ("jump_impulse", self.jump_impulse, self.jump_impulse >= 0.0),
            ("player_height", self.player_height, self.player_height > 0.0),
            ("half_width", self.half_width, self.half_width >= 0.0),
            ("ground_probe", self.ground_probe, self.ground_probe >= 0.0),
            (
                "grounded_velocity_epsilon",
                self.grounded_velocity_epsilon,
                self.grounded_velocity_epsilon > 0.0,
            ),
        ];
        for (name, value, ok) in checks {
            if !(ok && value.is_finite()) {
                return Err(Error::InvalidConfig(format!("{name} out of range: {value}")));
            }
        }
        if !self.respawn_point.is_finite() {
            return Err(Error::InvalidConfig("respawn_point must be finite".into()));
        }
        if self.respawn_point.y <= self.void_threshold {
            return Err(Error::InvalidConfig(format!(
                "respawn_point.y ({}) must be above void_threshold ({})",
                self.respawn_point.y, self.void_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_validate() {
        let config = PhysicsConfig::default();
        assert!(config.validate().is_ok());
        assert_relative_eq!(config.head_offset(), 1.5);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(PhysicsConfig::default()
            .with_player_height(0.0)
            .validate()
            .is_err());
        assert!(PhysicsConfig::default()
            .with_gravity(f32::INFINITY)
            .validate()
            .is_err());
        assert!(PhysicsConfig::default()
            .with_respawn_point(Vec3::new(0.0, -60.0, 0.0))
            .validate()
            .is_err());
    }
}
