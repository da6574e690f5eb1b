mod flight;

pub use flight::{build_flight_body, spawn_aircraft, spawn_obstacle, FlightPlugin, FlightSet};
