pub mod body;
pub mod config;

pub use body::{FlightBody, FlightSnapshot};
pub use config::{
    AircraftConfig, FixedStartConfig, FlightConfig, ModelFrame, RandomStartConfig, StartConfig,
    VolumeSource,
};
