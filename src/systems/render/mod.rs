mod transform;

pub use transform::transform_sync_system;
