pub mod physics;
pub mod simulation;

pub use physics::{GroundContact, PhysicsConfig};
pub use simulation::SimulationConfig;
