use aerobox::resources::{GroundContact, PhysicsConfig};

/// Default world constants with the origin resting on the ground plane.
pub fn origin_contact_physics() -> PhysicsConfig {
    PhysicsConfig {
        ground_contact: GroundContact::Origin,
        ..Default::default()
    }
}

/// Default world constants with the lowest volume corner resting on the ground.
pub fn volume_contact_physics() -> PhysicsConfig {
    PhysicsConfig {
        ground_contact: GroundContact::Volume,
        ..Default::default()
    }
}

/// No gravity, for isolating the longitudinal and turning dynamics.
pub fn weightless_physics() -> PhysicsConfig {
    PhysicsConfig {
        gravity: 0.0,
        ..origin_contact_physics()
    }
}
