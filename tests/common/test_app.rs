use aerobox::{
    components::{AircraftConfig, CollisionEvent, FlightControls, ObstacleConfig, PlayerController},
    plugins::FlightPlugin,
    resources::{PhysicsConfig, SimClock, SimulationConfig},
};
use bevy::{ecs::event::Events, prelude::*};

// Builder for creating a test application with customizable configuration
#[derive(Default)]
pub struct TestAppBuilder {
    physics_config: Option<PhysicsConfig>,
    aircraft_configs: Vec<AircraftConfig>,
    obstacle_configs: Vec<ObstacleConfig>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_physics(mut self, config: PhysicsConfig) -> Self {
        self.physics_config = Some(config);
        self
    }

    pub fn with_aircraft(mut self, config: AircraftConfig) -> Self {
        self.aircraft_configs.push(config);
        self
    }

    pub fn with_obstacle(mut self, config: ObstacleConfig) -> Self {
        self.obstacle_configs.push(config);
        self
    }

    pub fn build(self) -> TestApp {
        let config = SimulationConfig {
            physics: self.physics_config.unwrap_or_default(),
            aircraft: self.aircraft_configs,
            obstacles: self.obstacle_configs,
        };

        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(FlightPlugin::new(config));
        app.finish();
        app.cleanup();

        // Spawn the scene without advancing any fixed steps
        app.world_mut().run_schedule(Startup);

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Runs exactly one fixed simulation tick.
    pub fn step(&mut self) {
        self.app.world_mut().run_schedule(FixedUpdate);
    }

    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.step();
        }
    }

    pub fn clock(&self) -> SimClock {
        *self.app.world().resource::<SimClock>()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }

    pub fn query_all<T: Component>(&mut self) -> Vec<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.iter(world).collect()
    }

    /// Replaces the controls of every active player aircraft.
    pub fn set_controls(&mut self, controls: FlightControls) {
        let world = self.app.world_mut();
        let mut query = world.query::<(&mut FlightControls, &PlayerController)>();
        for (mut current, controller) in query.iter_mut(world) {
            if controller.active {
                *current = controls;
            }
        }
    }

    /// Collision events sent since the app was built.
    pub fn collision_events(&self) -> Vec<CollisionEvent> {
        self.app
            .world()
            .resource::<Events<CollisionEvent>>()
            .iter_current_update_events()
            .cloned()
            .collect()
    }
}
