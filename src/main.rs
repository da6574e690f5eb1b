use bevy::{log::LogPlugin, prelude::*};
use std::env;

use aerobox::{
    components::{CollisionComponent, FlightBody, FlightControls, PlayerController, Thrust},
    plugins::FlightPlugin,
    resources::{SimClock, SimulationConfig},
};

const DEFAULT_TICKS: u64 = 600;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config_path = None;
    let mut ticks = DEFAULT_TICKS;
    for arg in env::args().skip(1) {
        match arg.parse::<u64>() {
            Ok(count) => ticks = count,
            Err(_) => config_path = Some(arg),
        }
    }

    let config = match &config_path {
        Some(path) => SimulationConfig::from_file(path)?,
        None => SimulationConfig::default(),
    };

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_plugins(FlightPlugin::new(config));
    app.finish();
    app.cleanup();
    app.world_mut().run_schedule(Startup);

    // Scripted take-off: full throttle, then glide with the engine idle.
    let powered_ticks = ticks * 3 / 4;
    for tick in 0..ticks {
        let thrust = if tick < powered_ticks {
            Thrust::Forward
        } else {
            Thrust::Idle
        };
        set_thrust(app.world_mut(), thrust);
        app.world_mut().run_schedule(FixedUpdate);
    }

    let report = snapshot_report(app.world_mut());
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn set_thrust(world: &mut World, thrust: Thrust) {
    let mut query = world.query::<(&mut FlightControls, &PlayerController)>();
    for (mut controls, controller) in query.iter_mut(world) {
        if controller.active {
            controls.thrust = thrust;
        }
    }
}

fn snapshot_report(world: &mut World) -> serde_json::Value {
    let clock = *world.resource::<SimClock>();
    let mut query = world.query::<(&Name, &FlightBody, &CollisionComponent)>();
    let aircraft: Vec<_> = query
        .iter(world)
        .map(|(name, body, collision)| {
            serde_json::json!({
                "name": name.as_str(),
                "state": body.snapshot(),
                "collisions": collision,
            })
        })
        .collect();

    serde_json::json!({
        "tick": clock.tick(),
        "elapsed_seconds": clock.elapsed_seconds(),
        "aircraft": aircraft,
    })
}
