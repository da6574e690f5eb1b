use bevy::prelude::*;

use super::query::test_colliders;
use crate::{
    components::{CollisionComponent, CollisionEvent, FlightBody, Obstacle},
    resources::SimClock,
};

/// Tests every flight body against every obstacle using this tick's refit
/// volumes.
///
/// `has_collided` reflects only the current tick; the count and last hit time
/// accumulate until the component is reset.
pub fn collision_detection_system(
    mut bodies: Query<(Entity, &FlightBody, &mut CollisionComponent)>,
    obstacles: Query<(Entity, &Obstacle)>,
    clock: Res<SimClock>,
    mut collision_events: EventWriter<CollisionEvent>,
) {
    let time = clock.elapsed_seconds();

    for (entity, body, mut collision) in bodies.iter_mut() {
        collision.has_collided = false;
        let collider = body.collider();

        for (obstacle_entity, obstacle) in obstacles.iter() {
            if !test_colliders(&collider, &obstacle.collider).is_hit() {
                continue;
            }

            let impact_point = body
                .world_volume()
                .intersection(obstacle.world_volume())
                .map(|overlap| overlap.center())
                .unwrap_or_else(|| body.position());

            info!(
                "Collision between {:?} and '{}' at ({:.2}, {:.2}, {:.2}), t={:.3}s",
                entity, obstacle.name, impact_point.x, impact_point.y, impact_point.z, time
            );

            collision.register_collision(time);
            collision_events.send(CollisionEvent {
                entity,
                obstacle: obstacle_entity,
                impact_point,
                time,
            });
        }
    }
}
