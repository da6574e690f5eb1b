use bevy::prelude::*;
use nalgebra::{Matrix4, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::{BoundingVolume, Corners};

/// Emitted when a body's volume intersects an obstacle's in the narrow phase.
#[derive(Event, Debug, Clone)]
pub struct CollisionEvent {
    /// Entity that collided
    pub entity: Entity,
    /// Obstacle it collided with
    pub obstacle: Entity,
    /// Centre of the overlap between the two world boxes
    pub impact_point: Vector3<f64>,
    /// Simulated time of the tick that detected the hit
    pub time: f64,
}

/// World-space collision geometry: the refit box for the broad phase and the
/// oriented corners it was flattened from for the narrow phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub volume: BoundingVolume,
    pub corners: Corners,
}

impl Collider {
    pub fn new(volume: BoundingVolume, corners: Corners) -> Self {
        Self { volume, corners }
    }

    /// Collider for a box that is already axis-aligned in world space.
    pub fn axis_aligned(volume: BoundingVolume) -> Self {
        Self {
            volume,
            corners: volume.corners(),
        }
    }

    /// Places a local box in the world through `transform`.
    pub fn from_local(local: &BoundingVolume, transform: &Matrix4<f64>) -> Self {
        let corners = local.transformed_corners(transform);
        Self {
            volume: BoundingVolume::enclosing(&corners),
            corners,
        }
    }
}

/// Per-body collision bookkeeping.
#[derive(Component, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CollisionComponent {
    /// Whether entity has collided this tick
    pub has_collided: bool,
    /// Hits registered since the last reset
    pub collision_count: u32,
    /// Time of last collision
    pub last_collision_time: f64,
}

impl CollisionComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.has_collided = false;
        self.collision_count = 0;
        self.last_collision_time = 0.0;
    }

    pub fn register_collision(&mut self, time: f64) {
        self.has_collided = true;
        self.collision_count += 1;
        self.last_collision_time = time;
    }

    pub fn has_recent_collision(&self, current_time: f64, window: f64) -> bool {
        self.collision_count > 0 && (current_time - self.last_collision_time) < window
    }
}
