use bevy::prelude::*;
use nalgebra::{Matrix4, Translation3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::{BoundingVolume, Collider, VolumeSource};
use crate::utils::SimError;

/// A static volume bodies are tested against, such as a building or the
/// airport model.
#[derive(Component, Debug, Clone)]
pub struct Obstacle {
    pub name: String,
    pub collider: Collider,
}

impl Obstacle {
    pub fn new(name: impl Into<String>, local: &BoundingVolume, transform: &Matrix4<f64>) -> Self {
        Self {
            name: name.into(),
            collider: Collider::from_local(local, transform),
        }
    }

    pub fn from_config(config: &ObstacleConfig) -> Result<Self, SimError> {
        config.validate()?;
        let local = config.volume.resolve()?;
        Ok(Self::new(config.name.clone(), &local, &config.transform()))
    }

    pub fn world_volume(&self) -> &BoundingVolume {
        &self.collider.volume
    }
}

/// Placement of an obstacle's local volume in the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleConfig {
    pub name: String,
    pub volume: VolumeSource,
    #[serde(default)]
    pub position: Vector3<f64>,
    #[serde(default = "unit_scale")]
    pub scale: f64,
    /// Rotation about +Y (degrees).
    #[serde(default)]
    pub yaw: f64,
}

fn unit_scale() -> f64 {
    1.0
}

impl ObstacleConfig {
    /// translate(position) * rotateY(yaw) * scale
    pub fn transform(&self) -> Matrix4<f64> {
        Translation3::from(self.position).to_homogeneous()
            * UnitQuaternion::from_axis_angle(&Vector3::y_axis(), self.yaw.to_radians())
                .to_homogeneous()
            * Matrix4::new_nonuniform_scaling(&Vector3::repeat(self.scale))
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.scale > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "obstacle '{}' scale must be positive, got {}",
                self.name, self.scale
            )));
        }
        self.volume.resolve().map(|_| ())
    }
}
