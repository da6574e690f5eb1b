use bevy::prelude::*;
use nalgebra::{Matrix4, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::utils::SimError;

/// Tuning constants for the simplified flight model.
///
/// Angles are in degrees and rates in degrees per second.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub max_speed: f64,
    /// Drag snaps `|speed|` below this to zero.
    pub min_speed: f64,
    pub acceleration: f64,
    pub lift_threshold: f64,
    pub lift_gain: f64,
    /// Multiplicative decay applied per unpowered tick.
    pub drag: f64,
    pub banking_speed: f64,
    pub max_banking_angle: f64,
    pub max_yaw_angle: f64,
    pub pitch_rate: f64,
    pub max_pitch_angle: f64,
    /// Speed used by the direct strafe and nudge translations.
    pub manual_speed: f64,
    pub model: ModelFrame,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            max_speed: 50.0,
            min_speed: 0.01,
            acceleration: 10.0,
            lift_threshold: 15.0,
            lift_gain: 0.01,
            drag: 0.98,
            banking_speed: 15.0,
            max_banking_angle: 15.0,
            max_yaw_angle: 15.0,
            pitch_rate: 30.0,
            max_pitch_angle: 89.0,
            manual_speed: 5.0,
            model: ModelFrame::default(),
        }
    }
}

impl FlightConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.max_speed > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "max_speed must be positive, got {}",
                self.max_speed
            )));
        }
        if !(self.drag > 0.0 && self.drag <= 1.0) {
            return Err(SimError::InvalidConfig(format!(
                "drag must lie in (0, 1], got {}",
                self.drag
            )));
        }
        if !(0.0..90.0).contains(&self.max_pitch_angle) {
            return Err(SimError::InvalidConfig(format!(
                "max_pitch_angle must lie in [0, 90), got {}",
                self.max_pitch_angle
            )));
        }

        let non_negative = [
            ("min_speed", self.min_speed),
            ("acceleration", self.acceleration),
            ("lift_threshold", self.lift_threshold),
            ("lift_gain", self.lift_gain),
            ("banking_speed", self.banking_speed),
            ("max_banking_angle", self.max_banking_angle),
            ("max_yaw_angle", self.max_yaw_angle),
            ("pitch_rate", self.pitch_rate),
            ("manual_speed", self.manual_speed),
        ];
        if let Some((name, value)) = non_negative.iter().find(|(_, v)| !(*v >= 0.0)) {
            return Err(SimError::InvalidConfig(format!(
                "{name} must be non-negative, got {value}"
            )));
        }

        self.model.validate()
    }
}

/// Fixed mapping from mesh coordinates into the body frame
/// (+X forward, +Y up, +Z right).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelFrame {
    /// Uniform scale applied to the mesh.
    pub scale: f64,
    /// Rotation about +Y (degrees) turning the mesh nose onto +X.
    pub yaw_offset: f64,
    /// Rotation about +Z (degrees) levelling the mesh.
    pub pitch_offset: f64,
}

impl Default for ModelFrame {
    fn default() -> Self {
        Self {
            scale: 2.0,
            yaw_offset: 180.0,
            pitch_offset: -15.0,
        }
    }
}

impl ModelFrame {
    /// Identity frame, for meshes already authored in the body frame.
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            yaw_offset: 0.0,
            pitch_offset: 0.0,
        }
    }

    pub fn base_rotation(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::from_axis_angle(&Vector3::y_axis(), self.yaw_offset.to_radians())
            * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), self.pitch_offset.to_radians())
    }

    pub fn scale_matrix(&self) -> Matrix4<f64> {
        Matrix4::new_nonuniform_scaling(&Vector3::repeat(self.scale))
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.scale > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "model scale must be positive, got {}",
                self.scale
            )));
        }
        Ok(())
    }
}
