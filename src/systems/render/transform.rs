use bevy::prelude::*;

use crate::components::FlightBody;

/// Copies each body's composed world transform into its Bevy `Transform`.
pub fn transform_sync_system(mut query: Query<(&FlightBody, &mut Transform)>) {
    for (body, mut transform) in query.iter_mut() {
        *transform = body.render_transform();
    }
}
