#![allow(dead_code)]

mod assertions;
mod fixtures;
mod helpers;
mod test_app;

// Re-export
pub use assertions::{
    assert_flight_invariants, assert_orthonormal_basis, assert_position_eq, assert_resting_on,
};

pub use helpers::*;

pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
