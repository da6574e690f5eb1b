mod common;

use aerobox::components::{CollisionComponent, FlightBody, FlightControls, Obstacle};
use bevy::prelude::*;
use nalgebra::Vector3;

use common::{aircraft_entity, test_aircraft_config, test_tower_config, weightless_physics, TestAppBuilder};

fn tower_entity(app: &mut common::TestApp) -> Entity {
    let world = app.app.world_mut();
    let mut query = world.query_filtered::<Entity, With<Obstacle>>();
    query.get_single(world).expect("expected one obstacle")
}

#[test]
fn test_flying_into_tower_registers_hit() {
    let mut app = TestAppBuilder::new()
        .with_physics(weightless_physics())
        .with_aircraft(test_aircraft_config(Vector3::new(0.0, 10.0, 0.0)))
        .with_obstacle(test_tower_config(Vector3::new(30.0, 0.0, 0.0)))
        .build();
    let aircraft = aircraft_entity(&mut app);
    let tower = tower_entity(&mut app);

    app.set_controls(FlightControls::powered_forward());
    let mut hit_tick = None;
    for _ in 0..300 {
        app.step();
        let collision = app
            .query_single::<CollisionComponent>()
            .expect("collision component missing");
        if collision.has_collided {
            hit_tick = Some(app.clock().tick());
            break;
        }
    }
    assert!(hit_tick.is_some(), "aircraft never reached the tower");

    let events = app.collision_events();
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.entity, aircraft);
    assert_eq!(event.obstacle, tower);
    assert_eq!(event.time, app.clock().elapsed_seconds());

    let body_volume = *app
        .query_single::<FlightBody>()
        .expect("aircraft not spawned")
        .world_volume();
    assert!(body_volume.contains_point(&event.impact_point));
    let tower_volume = *app
        .query_single::<Obstacle>()
        .expect("obstacle not spawned")
        .world_volume();
    assert!(tower_volume.contains_point(&event.impact_point));

    let collision = app
        .query_single::<CollisionComponent>()
        .expect("collision component missing");
    assert_eq!(collision.collision_count, 1);
    assert_eq!(collision.last_collision_time, event.time);
}

#[test]
fn test_hit_flag_clears_after_passing_through() {
    let mut app = TestAppBuilder::new()
        .with_physics(weightless_physics())
        .with_aircraft(test_aircraft_config(Vector3::new(0.0, 10.0, 0.0)))
        .with_obstacle(test_tower_config(Vector3::new(30.0, 0.0, 0.0)))
        .build();

    app.set_controls(FlightControls::powered_forward());
    app.run_steps(300);

    let collision = *app
        .query_single::<CollisionComponent>()
        .expect("collision component missing");
    assert!(!collision.has_collided);
    assert!(collision.collision_count > 1);
    assert_eq!(app.collision_events().len() as u32, collision.collision_count);
}

#[test]
fn test_passing_beside_tower_has_no_hit() {
    let mut app = TestAppBuilder::new()
        .with_physics(weightless_physics())
        .with_aircraft(test_aircraft_config(Vector3::new(0.0, 10.0, 0.0)))
        .with_obstacle(test_tower_config(Vector3::new(30.0, 0.0, 10.0)))
        .build();

    app.set_controls(FlightControls::powered_forward());
    app.run_steps(300);

    let collision = app
        .query_single::<CollisionComponent>()
        .expect("collision component missing");
    assert_eq!(collision.collision_count, 0);
    assert!(app.collision_events().is_empty());
}
