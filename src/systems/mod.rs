mod collisions;
mod controller;
mod flight;
mod render;

pub use collisions::{
    broad_phase, collision_detection_system, narrow_phase, test_colliders, CollisionPhase,
};
pub use controller::{controls_from_keys, flight_keyboard_system};
pub use flight::{flight_dynamics_system, step_flight};
pub use render::transform_sync_system;
