use aerobox::components::{
    AircraftConfig, FixedStartConfig, FlightConfig, ModelFrame, ObstacleConfig, StartConfig,
    VolumeSource,
};
use nalgebra::Vector3;

/// Unit-scale aircraft with a 2 x 1 x 4 box, starting at `position`.
pub fn test_aircraft_config(position: Vector3<f64>) -> AircraftConfig {
    AircraftConfig {
        name: "test_aircraft".to_string(),
        flight: FlightConfig {
            model: ModelFrame::identity(),
            ..Default::default()
        },
        start: StartConfig::Fixed(FixedStartConfig { position }),
        volume: VolumeSource::Extents {
            min: Vector3::new(-1.0, -0.5, -2.0),
            max: Vector3::new(1.0, 0.5, 2.0),
        },
    }
}

/// A 4 x 20 x 4 tower standing on the ground at `position`.
pub fn test_tower_config(position: Vector3<f64>) -> ObstacleConfig {
    ObstacleConfig {
        name: "tower".to_string(),
        volume: VolumeSource::Extents {
            min: Vector3::new(-2.0, 0.0, -2.0),
            max: Vector3::new(2.0, 20.0, 2.0),
        },
        position,
        scale: 1.0,
        yaw: 0.0,
    }
}
