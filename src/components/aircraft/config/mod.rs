mod aircraft;
mod flight;
mod start;

pub use aircraft::{AircraftConfig, VolumeSource};
pub use flight::{FlightConfig, ModelFrame};
pub use start::{FixedStartConfig, RandomStartConfig, StartConfig};
