use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Marks the aircraft driven by local keyboard input.
#[derive(Component, Debug, Default)]
pub struct PlayerController {
    pub active: bool,
}

impl PlayerController {
    pub fn new() -> Self {
        Self { active: true }
    }

    pub fn disabled() -> Self {
        Self { active: false }
    }

    pub fn enable(&mut self) {
        self.active = true;
    }

    pub fn disable(&mut self) {
        self.active = false;
    }
}

/// Longitudinal intent. `Idle` leaves the engine unpowered, so drag applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Thrust {
    #[default]
    Idle,
    Forward,
    Reverse,
}

/// Banking intent. `Straight` lets roll and yaw auto-level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Turn {
    #[default]
    Straight,
    Left,
    Right,
}

/// Control intent sampled once per tick.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightControls {
    pub thrust: Thrust,
    pub turn: Turn,
    /// Pitch command in [-1, 1], positive noses up.
    pub pitch: f64,
    /// Sideways translation speed (m/s), positive to the right.
    pub strafe: f64,
    /// Direct forward translation speed (m/s), independent of thrust.
    pub nudge: f64,
}

impl FlightControls {
    pub fn powered_forward() -> Self {
        Self {
            thrust: Thrust::Forward,
            ..Default::default()
        }
    }

    pub fn turning(turn: Turn) -> Self {
        Self {
            turn,
            ..Default::default()
        }
    }

    pub fn is_powered(&self) -> bool {
        self.thrust != Thrust::Idle
    }
}
