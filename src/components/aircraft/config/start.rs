use bevy::prelude::*;
use nalgebra::{Vector2, Vector3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::utils::SimError;

/// Where an aircraft is placed when the scene is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartConfig {
    Fixed(FixedStartConfig),
    Random(RandomStartConfig),
}

impl Default for StartConfig {
    fn default() -> Self {
        StartConfig::Fixed(FixedStartConfig::default())
    }
}

impl StartConfig {
    pub fn position(&self) -> Vector3<f64> {
        match self {
            StartConfig::Fixed(fixed) => fixed.position,
            StartConfig::Random(random) => random.generate_position(),
        }
    }

    pub fn validate(&self) -> Result<(), SimError> {
        match self {
            StartConfig::Fixed(fixed) => {
                if fixed.position.iter().all(|v| v.is_finite()) {
                    Ok(())
                } else {
                    Err(SimError::InvalidConfig(format!(
                        "start position must be finite, got {:?}",
                        fixed.position
                    )))
                }
            }
            StartConfig::Random(random) => random.validate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedStartConfig {
    /// World position (m), +Y up.
    pub position: Vector3<f64>,
}

impl Default for FixedStartConfig {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 6.0, -60.0),
        }
    }
}

/// Gaussian scatter around a horizontal origin with a uniform altitude band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomStartConfig {
    /// Horizontal origin as (x, z) (m).
    pub origin: Vector2<f64>,
    /// Standard deviation of the horizontal scatter (m).
    pub variance: f64,
    pub min_altitude: f64,
    pub max_altitude: f64,
    /// Seed for the generator; `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for RandomStartConfig {
    fn default() -> Self {
        Self {
            origin: Vector2::new(0.0, -60.0),
            variance: 20.0,
            min_altitude: 6.0,
            max_altitude: 30.0,
            seed: None,
        }
    }
}

impl RandomStartConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.variance >= 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "start variance must be non-negative, got {}",
                self.variance
            )));
        }
        if !self.min_altitude.is_finite() || !self.max_altitude.is_finite() {
            return Err(SimError::InvalidConfig(
                "start altitude band must be finite".to_string(),
            ));
        }
        Ok(())
    }

    pub fn generate_position(&self) -> Vector3<f64> {
        let mut rng = if let Some(seed) = self.seed {
            debug!("Creating start position RNG with seed: {}", seed);
            ChaCha8Rng::seed_from_u64(seed)
        } else {
            warn!("No start seed provided, using entropy");
            ChaCha8Rng::from_entropy()
        };

        let (min_altitude, max_altitude) = if self.min_altitude > self.max_altitude {
            warn!(
                "Invalid altitude range: min_altitude ({}) > max_altitude ({}). Swapping values.",
                self.min_altitude, self.max_altitude
            );
            (self.max_altitude, self.min_altitude)
        } else {
            (self.min_altitude, self.max_altitude)
        };

        // Box-Muller: u1 is kept away from zero so ln() stays finite.
        let u1: f64 = rng.gen_range(f64::EPSILON..1.0);
        let u2: f64 = rng.gen();
        let radius = self.variance * (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * std::f64::consts::PI * u2;

        let x = self.origin.x + radius * theta.cos();
        let z = self.origin.y + radius * theta.sin();
        let y = if max_altitude > min_altitude {
            rng.gen_range(min_altitude..max_altitude)
        } else {
            min_altitude
        };

        let position = Vector3::new(x, y, z);
        info!("Generated start position: x={:.2}, y={:.2}, z={:.2}", x, y, z);
        position
    }
}
