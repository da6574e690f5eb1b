use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::SimError;

/// How the ground clamp decides that the body touches the ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroundContact {
    /// The body origin rests on the ground plane.
    Origin,
    /// The lowest corner of the world bounding volume rests on the ground plane.
    #[default]
    Volume,
}

/// World constants shared by every body in the scene.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Fixed simulation step (s). Never derived from frame time.
    pub time_step: f64,
    /// Vertical acceleration (m/s^2), negative pulls down.
    pub gravity: f64,
    pub ground_level: f64,
    pub ground_contact: GroundContact,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            time_step: 0.016,
            gravity: -9.8,
            ground_level: 3.0,
            ground_contact: GroundContact::Volume,
        }
    }
}

impl PhysicsConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.time_step > 0.0 && self.time_step.is_finite()) {
            return Err(SimError::InvalidConfig(format!(
                "time_step must be positive, got {}",
                self.time_step
            )));
        }
        if !self.gravity.is_finite() || !self.ground_level.is_finite() {
            return Err(SimError::InvalidConfig(
                "gravity and ground_level must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
