use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::physics::PhysicsConfig;
use crate::components::{AircraftConfig, ObstacleConfig, VolumeSource};
use crate::utils::SimError;

/// Complete scene description: world constants, aircraft and obstacles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub aircraft: Vec<AircraftConfig>,
    #[serde(default)]
    pub obstacles: Vec<ObstacleConfig>,
}

impl Default for SimulationConfig {
    /// One airplane on the approach to a control tower.
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            aircraft: vec![AircraftConfig::default()],
            obstacles: vec![ObstacleConfig {
                name: "control_tower".to_string(),
                volume: VolumeSource::Extents {
                    min: Vector3::new(-2.0, 0.0, -2.0),
                    max: Vector3::new(2.0, 20.0, 2.0),
                },
                position: Vector3::new(60.0, 3.0, -60.0),
                scale: 1.0,
                yaw: 0.0,
            }],
        }
    }
}

impl SimulationConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SimError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        info!("Loading simulation config from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn to_yaml_string(&self) -> Result<String, SimError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        self.physics.validate()?;
        for aircraft in &self.aircraft {
            aircraft.validate().map_err(|e| {
                SimError::InvalidConfig(format!("aircraft '{}': {}", aircraft.name, e))
            })?;
        }
        for obstacle in &self.obstacles {
            obstacle.validate()?;
        }
        Ok(())
    }
}
