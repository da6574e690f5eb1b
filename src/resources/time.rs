use bevy::prelude::*;

/// Simulated time, advanced by exactly one fixed step per dynamics tick.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct SimClock {
    tick: u64,
    elapsed: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, time_step: f64) {
        self.tick += 1;
        self.elapsed += time_step;
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Simulated seconds since the last reset.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
