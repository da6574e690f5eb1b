pub mod aircraft;
pub mod bounding;
pub mod collision;
pub mod controller;
pub mod obstacle;

pub use aircraft::{
    AircraftConfig, FixedStartConfig, FlightBody, FlightConfig, FlightSnapshot, ModelFrame,
    RandomStartConfig, StartConfig, VolumeSource,
};
pub use bounding::{BoundingVolume, Corners};
pub use collision::{Collider, CollisionComponent, CollisionEvent};
pub use controller::{FlightControls, PlayerController, Thrust, Turn};
pub use obstacle::{Obstacle, ObstacleConfig};
