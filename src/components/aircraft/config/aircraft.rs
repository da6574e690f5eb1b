use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::{BoundingVolume, FlightConfig, StartConfig};
use crate::utils::SimError;

/// Everything needed to spawn one aircraft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftConfig {
    pub name: String,
    #[serde(default)]
    pub flight: FlightConfig,
    #[serde(default)]
    pub start: StartConfig,
    #[serde(default)]
    pub volume: VolumeSource,
}

impl Default for AircraftConfig {
    fn default() -> Self {
        Self {
            name: "airplane".to_string(),
            flight: FlightConfig::default(),
            start: StartConfig::default(),
            volume: VolumeSource::default(),
        }
    }
}

impl AircraftConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        self.flight.validate()?;
        self.start.validate()?;
        self.volume.resolve().map(|_| ())
    }
}

/// Local-space extents of a model, as handed over by the mesh loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeSource {
    /// Extents already reduced by the loader.
    Extents {
        min: Vector3<f64>,
        max: Vector3<f64>,
    },
    /// Raw mesh vertices, reduced here.
    Vertices(Vec<Vector3<f64>>),
}

impl Default for VolumeSource {
    fn default() -> Self {
        VolumeSource::Extents {
            min: Vector3::new(-1.5, -0.5, -2.0),
            max: Vector3::new(1.5, 0.5, 2.0),
        }
    }
}

impl VolumeSource {
    pub fn resolve(&self) -> Result<BoundingVolume, SimError> {
        match self {
            VolumeSource::Extents { min, max } => {
                let volume = BoundingVolume::new(*min, *max);
                if volume.is_degenerate() {
                    Err(SimError::DegenerateGeometry(format!(
                        "bounding volume has no extent: {volume}"
                    )))
                } else {
                    Ok(volume)
                }
            }
            VolumeSource::Vertices(points) => BoundingVolume::from_vertices(points)
                .filter(|volume| !volume.is_degenerate())
                .ok_or_else(|| {
                    SimError::DegenerateGeometry(format!(
                        "cannot build a bounding volume from {} vertices",
                        points.len()
                    ))
                }),
        }
    }
}
