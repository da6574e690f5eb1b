use std::io;
use thiserror::Error;

/// Errors raised while loading configuration or building a scene.
///
/// The per-tick simulation never produces these; numeric degeneracies inside
/// a tick are clamped or skipped where they occur.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Config error: {0}")]
    InvalidConfig(String),

    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),
}
