pub mod config;
mod time;

pub use config::{GroundContact, PhysicsConfig, SimulationConfig};
pub use time::SimClock;
