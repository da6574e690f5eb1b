use bevy::prelude::*;

use crate::{
    components::{FlightBody, FlightConfig, FlightControls, Thrust, Turn},
    resources::{GroundContact, PhysicsConfig, SimClock},
};

/// System advancing every flight body by one fixed step.
///
/// The step length comes from `PhysicsConfig`, never from frame time, so a
/// host that falls behind runs this system several times per frame.
pub fn flight_dynamics_system(
    mut query: Query<(&mut FlightBody, &FlightControls, &FlightConfig)>,
    physics: Res<PhysicsConfig>,
    mut clock: ResMut<SimClock>,
) {
    for (mut body, controls, config) in query.iter_mut() {
        step_flight(&mut body, controls, config, &physics);
    }
    clock.advance(physics.time_step);
}

/// Advances a single body by `physics.time_step`.
///
/// Intent is applied before gravity and gravity before the refit, so the
/// world volume always reflects the fully integrated state of this tick.
pub fn step_flight(
    body: &mut FlightBody,
    controls: &FlightControls,
    config: &FlightConfig,
    physics: &PhysicsConfig,
) {
    let dt = physics.time_step;

    apply_thrust(body, controls.thrust, config, dt);
    apply_manual_translation(body, controls, dt);
    apply_banking(body, controls.turn, config, dt);
    apply_pitch(body, controls.pitch, config, dt);
    body.update_orientation();

    apply_lift(body, config);
    body.velocity.y += physics.gravity * dt;
    // Semi-implicit Euler: velocity is already updated.
    body.position += (body.forward() * body.speed + body.velocity) * dt;
    body.refit();

    clamp_to_ground(body, physics);

    trace!(
        "pos=({:.3}, {:.3}, {:.3}) speed={:.3} yaw={:.2} roll={:.2} grounded={}",
        body.position.x,
        body.position.y,
        body.position.z,
        body.speed,
        body.yaw,
        body.roll,
        body.grounded
    );
}

fn apply_thrust(body: &mut FlightBody, thrust: Thrust, config: &FlightConfig, dt: f64) {
    match thrust {
        Thrust::Forward => body.speed += config.acceleration * dt,
        Thrust::Reverse => body.speed -= config.acceleration * dt,
        Thrust::Idle => {
            body.speed = decay(body.speed, config.drag, config.min_speed);
            body.velocity.x = decay(body.velocity.x, config.drag, config.min_speed);
            body.velocity.z = decay(body.velocity.z, config.drag, config.min_speed);
        }
    }
    body.speed = body.speed.clamp(-config.max_speed, config.max_speed);
}

/// Multiplicative drag with a snap to zero, avoiding an endless creep.
fn decay(value: f64, drag: f64, threshold: f64) -> f64 {
    let decayed = value * drag;
    if decayed.abs() < threshold {
        0.0
    } else {
        decayed
    }
}

fn apply_manual_translation(body: &mut FlightBody, controls: &FlightControls, dt: f64) {
    if controls.strafe.is_finite() {
        body.position += body.right() * controls.strafe * dt;
    }
    if controls.nudge.is_finite() {
        body.position += body.forward() * controls.nudge * dt;
    }
}

fn apply_banking(body: &mut FlightBody, turn: Turn, config: &FlightConfig, dt: f64) {
    let step = config.banking_speed * dt;
    match turn {
        Turn::Left => {
            body.roll -= step;
            body.yaw -= step;
        }
        Turn::Right => {
            body.roll += step;
            body.yaw += step;
        }
        Turn::Straight => {
            body.roll = level(body.roll, step);
            body.yaw = level(body.yaw, step);
        }
    }
    body.roll = body
        .roll
        .clamp(-config.max_banking_angle, config.max_banking_angle);
    body.yaw = body.yaw.clamp(-config.max_yaw_angle, config.max_yaw_angle);
}

/// Moves `angle` toward zero by `step`, landing exactly on zero instead of
/// crossing it.
fn level(angle: f64, step: f64) -> f64 {
    if angle.abs() <= step {
        0.0
    } else {
        angle - step * angle.signum()
    }
}

fn apply_pitch(body: &mut FlightBody, input: f64, config: &FlightConfig, dt: f64) {
    let input = if input.is_finite() {
        input.clamp(-1.0, 1.0)
    } else {
        0.0
    };
    body.pitch = (body.pitch + input * config.pitch_rate * dt)
        .clamp(-config.max_pitch_angle, config.max_pitch_angle);
}

/// Linear lift bonus above the threshold speed.
fn apply_lift(body: &mut FlightBody, config: &FlightConfig) {
    if body.speed >= config.lift_threshold {
        body.velocity.y += (body.speed - config.lift_threshold) * config.lift_gain;
    }
}

/// Rests the body on the ground plane if it ended the tick at or below it.
fn clamp_to_ground(body: &mut FlightBody, physics: &PhysicsConfig) {
    let penetration = match physics.ground_contact {
        GroundContact::Origin => physics.ground_level - body.position.y,
        GroundContact::Volume => physics.ground_level - body.world_volume().min.y,
    };

    body.grounded = penetration >= 0.0;
    if !body.grounded {
        return;
    }

    match physics.ground_contact {
        GroundContact::Origin => body.position.y = physics.ground_level,
        GroundContact::Volume => body.position.y += penetration,
    }
    body.velocity.y = 0.0;
    body.refit();
}
