use bevy::prelude::*;

use crate::components::{FlightConfig, FlightControls, PlayerController, Thrust, Turn};

/// System for flying the player-controlled aircraft with the keyboard.
///
/// W applies thrust, S nudges backward, A/D strafe, the left and right arrows
/// bank and the up and down arrows pitch. Hosts without keyboard input keep
/// whatever controls they scripted.
pub fn flight_keyboard_system(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut query: Query<(&mut FlightControls, &FlightConfig, &PlayerController)>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };

    for (mut controls, config, controller) in query.iter_mut() {
        if !controller.active {
            continue;
        }
        *controls = controls_from_keys(&keyboard, config);
    }
}

/// Samples the held keys into one tick of control intent.
pub fn controls_from_keys(keyboard: &ButtonInput<KeyCode>, config: &FlightConfig) -> FlightControls {
    let held = |key: KeyCode| keyboard.pressed(key);
    let axis = |positive: KeyCode, negative: KeyCode| match (held(positive), held(negative)) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    };

    let thrust = if held(KeyCode::KeyW) {
        Thrust::Forward
    } else {
        Thrust::Idle
    };

    let turn = match (held(KeyCode::ArrowLeft), held(KeyCode::ArrowRight)) {
        (true, false) => Turn::Left,
        (false, true) => Turn::Right,
        _ => Turn::Straight,
    };

    let nudge = if held(KeyCode::KeyS) {
        -config.manual_speed
    } else {
        0.0
    };

    FlightControls {
        thrust,
        turn,
        pitch: axis(KeyCode::ArrowUp, KeyCode::ArrowDown),
        strafe: axis(KeyCode::KeyD, KeyCode::KeyA) * config.manual_speed,
        nudge,
    }
}
