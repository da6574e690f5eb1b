mod dynamics;

pub use dynamics::{flight_dynamics_system, step_flight};
