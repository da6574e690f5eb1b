use crate::common::TestApp;
use aerobox::components::{FlightBody, FlightControls};
use bevy::prelude::*;

/// Runs single fixed steps until `condition` holds, up to `max_steps`.
pub fn wait_for_condition<F>(test_app: &mut TestApp, condition: F, max_steps: usize) -> bool
where
    F: Fn(&FlightBody) -> bool,
{
    for _ in 0..max_steps {
        if test_app.query_single::<FlightBody>().map_or(false, |body| condition(body)) {
            return true;
        }
        test_app.step();
    }
    test_app.query_single::<FlightBody>().map_or(false, |body| condition(body))
}

/// Steps with the given controls, checking `check` after every tick.
pub fn fly_checked<F>(test_app: &mut TestApp, controls: FlightControls, steps: usize, check: F)
where
    F: Fn(&FlightBody),
{
    test_app.set_controls(controls);
    for _ in 0..steps {
        test_app.step();
        let body = test_app
            .query_single::<FlightBody>()
            .expect("no flight body spawned");
        check(body);
    }
}

/// Entity of the single spawned flight body.
pub fn aircraft_entity(test_app: &mut TestApp) -> Entity {
    let world = test_app.app.world_mut();
    let mut query = world.query_filtered::<Entity, With<FlightBody>>();
    query
        .get_single(world)
        .expect("expected exactly one flight body")
}
