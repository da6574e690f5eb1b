mod keyboard;

pub use keyboard::{controls_from_keys, flight_keyboard_system};
