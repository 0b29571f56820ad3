//! Game configuration.

use burden_core::{Error, Result};
use burden_physics::PhysicsConfig;
use burden_render::CameraConfig;
use burden_world::{TerrainConfig, WorldConfig};
use serde::{Deserialize, Serialize};

/// Player controller tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Walking speed in blocks per second.
    pub walk_speed: f32,
    /// Walking speed factor while sprinting. Flight ignores it.
    pub sprint_multiplier: f32,
    /// Longest distance at which blocks can be broken or placed.
    pub reach: f32,
    /// Blocks are never placed with their center closer than this to the eye.
    pub min_place_distance: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            walk_speed: 10.0,
            sprint_multiplier: 2.0,
            reach: 8.0,
            min_place_distance: 1.5,
        }
    }
}

impl ControllerConfig {
    #[must_use]
    pub const fn with_walk_speed(mut self, walk_speed: f32) -> Self {
        self.walk_speed = walk_speed;
        self
    }

    #[must_use]
    pub const fn with_reach(mut self, reach: f32) -> Self {
        self.reach = reach;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("walk_speed", self.walk_speed),
            ("sprint_multiplier", self.sprint_multiplier),
            ("reach", self.reach),
            ("min_place_distance", self.min_place_distance),
        ];
        for (name, value) in fields {
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Everything needed to start a [`crate::Game`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub world: WorldConfig,
    pub terrain: TerrainConfig,
    pub physics: PhysicsConfig,
    pub camera: CameraConfig,
    pub controller: ControllerConfig,
}

impl GameConfig {
    #[must_use]
    pub fn with_world(mut self, world: WorldConfig) -> Self {
        self.world = world;
        self
    }

    #[must_use]
    pub fn with_terrain(mut self, terrain: TerrainConfig) -> Self {
        self.terrain = terrain;
        self
    }

    #[must_use]
    pub fn with_camera(mut self, camera: CameraConfig) -> Self {
        self.camera = camera;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.world.validate()?;
        self.terrain.validate()?;
        self.physics.validate()?;
        self.camera.validate()?;
        self.controller.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn negative_reach_is_rejected() {
        let config = ControllerConfig::default().with_reach(-1.0);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("reach"));
    }

    #[test]
    fn nested_errors_surface() {
        let config = GameConfig::default().with_world(WorldConfig::default().with_world_size(0));
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }
}
