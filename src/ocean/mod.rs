pub mod systems;

use crate::ocean::systems::*;
use bevy::prelude::*;

pub struct OceanPlugin;

impl Plugin for OceanPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_ocean)
            .add_systems(Update, animate_ocean);
    }
}
