use aerobox::components::{FlightBody, FlightConfig};
use approx::assert_relative_eq;
use nalgebra::Vector3;

const BASIS_TOLERANCE: f64 = 1e-4;

/// Assert the per-tick limits and basis invariants of a flight body
#[track_caller]
pub fn assert_flight_invariants(body: &FlightBody, config: &FlightConfig) {
    assert!(
        body.position().iter().all(|v| v.is_finite()),
        "Position is not finite: {:?}",
        body.position()
    );
    assert!(
        body.speed().abs() <= config.max_speed,
        "Speed {} exceeds {}",
        body.speed(),
        config.max_speed
    );
    assert!(
        body.roll().abs() <= config.max_banking_angle,
        "Roll {} exceeds {}",
        body.roll(),
        config.max_banking_angle
    );
    assert!(
        body.yaw().abs() <= config.max_yaw_angle,
        "Yaw {} exceeds {}",
        body.yaw(),
        config.max_yaw_angle
    );

    let volume = body.world_volume();
    assert!(
        volume.min.x <= volume.max.x && volume.min.y <= volume.max.y && volume.min.z <= volume.max.z,
        "World volume is inverted: {}",
        volume
    );

    assert_orthonormal_basis(body);
}

/// Assert that forward, right and up are unit length and mutually orthogonal
#[track_caller]
pub fn assert_orthonormal_basis(body: &FlightBody) {
    let (forward, right, up) = (body.forward(), body.right(), body.up());
    assert_relative_eq!(forward.norm(), 1.0, epsilon = BASIS_TOLERANCE);
    assert_relative_eq!(right.norm(), 1.0, epsilon = BASIS_TOLERANCE);
    assert_relative_eq!(up.norm(), 1.0, epsilon = BASIS_TOLERANCE);
    assert!(forward.dot(&right).abs() < BASIS_TOLERANCE, "forward . right != 0");
    assert!(forward.dot(&up).abs() < BASIS_TOLERANCE, "forward . up != 0");
    assert!(right.dot(&up).abs() < BASIS_TOLERANCE, "right . up != 0");
}

/// Assert that the lowest world corner sits on `ground_level` with no vertical velocity
#[track_caller]
pub fn assert_resting_on(body: &FlightBody, ground_level: f64) {
    assert_relative_eq!(body.world_volume().min.y, ground_level, epsilon = 1e-9);
    assert_eq!(body.velocity().y, 0.0, "Grounded body still has vertical velocity");
    assert!(body.grounded(), "Body is not flagged as grounded");
}

/// Assert that two positions are approximately equal
#[track_caller]
pub fn assert_position_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}
