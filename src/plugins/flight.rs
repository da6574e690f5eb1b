use bevy::prelude::*;

use crate::{
    components::{
        AircraftConfig, CollisionComponent, CollisionEvent, FlightBody, FlightControls, Obstacle,
        ObstacleConfig, PlayerController,
    },
    resources::{SimClock, SimulationConfig},
    systems::{
        collision_detection_system, flight_dynamics_system, flight_keyboard_system,
        transform_sync_system,
    },
    utils::SimError,
};

/// Ordering of one fixed tick: intent, integration and refit, collision
/// queries on the refit volumes, then the renderer-facing copy.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Input,
    Dynamics,
    Collision,
    Sync,
}

pub struct FlightPlugin {
    config: SimulationConfig,
}

impl FlightPlugin {
    pub fn new(config: SimulationConfig) -> Self {
        FlightPlugin { config }
    }

    fn setup_scene(mut commands: Commands, config: SimulationConfig) {
        for (index, aircraft) in config.aircraft.iter().enumerate() {
            let controller = if index == 0 {
                PlayerController::new()
            } else {
                PlayerController::disabled()
            };
            if let Err(e) = spawn_aircraft(&mut commands, aircraft, controller) {
                error!("Failed to spawn aircraft '{}': {}", aircraft.name, e);
            }
        }

        for obstacle in &config.obstacles {
            if let Err(e) = spawn_obstacle(&mut commands, obstacle) {
                error!("Failed to spawn obstacle '{}': {}", obstacle.name, e);
            }
        }
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();

        app.insert_resource(config.physics.clone())
            .insert_resource(SimClock::new())
            .insert_resource(Time::<Fixed>::from_seconds(config.physics.time_step))
            .add_event::<CollisionEvent>()
            .configure_sets(
                FixedUpdate,
                (
                    FlightSet::Input,
                    FlightSet::Dynamics,
                    FlightSet::Collision,
                    FlightSet::Sync,
                )
                    .chain(),
            )
            .add_systems(
                Startup,
                move |commands: Commands| Self::setup_scene(commands, config.clone()),
            )
            .add_systems(
                FixedUpdate,
                (
                    flight_keyboard_system.in_set(FlightSet::Input),
                    flight_dynamics_system.in_set(FlightSet::Dynamics),
                    collision_detection_system.in_set(FlightSet::Collision),
                    transform_sync_system.in_set(FlightSet::Sync),
                ),
            );
    }
}

/// Builds the body an aircraft config describes, placed at its start position.
pub fn build_flight_body(config: &AircraftConfig) -> Result<FlightBody, SimError> {
    config.validate()?;
    let local = config.volume.resolve()?;
    Ok(FlightBody::new(
        config.start.position(),
        local,
        config.flight.model,
    ))
}

pub fn spawn_aircraft(
    commands: &mut Commands,
    config: &AircraftConfig,
    controller: PlayerController,
) -> Result<Entity, SimError> {
    let body = build_flight_body(config)?;
    info!(
        "Spawning aircraft '{}' at ({:.2}, {:.2}, {:.2}) with volume {}",
        config.name,
        body.position().x,
        body.position().y,
        body.position().z,
        body.local_volume()
    );

    let entity = commands
        .spawn((
            body.render_transform(),
            body,
            config.flight.clone(),
            FlightControls::default(),
            CollisionComponent::new(),
            controller,
            Name::new(config.name.clone()),
        ))
        .id();
    Ok(entity)
}

pub fn spawn_obstacle(commands: &mut Commands, config: &ObstacleConfig) -> Result<Entity, SimError> {
    let obstacle = Obstacle::from_config(config)?;
    info!(
        "Spawning obstacle '{}' with world volume {}",
        obstacle.name,
        obstacle.world_volume()
    );
    let name = Name::new(obstacle.name.clone());
    Ok(commands.spawn((obstacle, name)).id())
}
