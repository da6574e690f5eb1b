mod detection;
mod query;

pub use detection::collision_detection_system;
pub use query::{broad_phase, narrow_phase, test_colliders, CollisionPhase};
