pub mod systems;

use crate::terrain::systems::*;
use bevy::prelude::*;

pub struct TerrainPlugin;

impl Plugin for TerrainPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_terrain)
            .add_systems(Update, (reshape_terrain, spin_terrain));
    }
}
