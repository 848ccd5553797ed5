pub mod components;
pub mod events;
pub mod logic;
mod systems;

use crate::markers::events::*;
use crate::markers::systems::*;
use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;

pub struct MarkersPlugin;

impl Plugin for MarkersPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MeshPickingPlugin)
            .add_message::<MarkerClicked>()
            .add_systems(Startup, spawn_markers)
            .add_systems(
                Update,
                (
                    handle_marker_clicks,
                    advance_orbits,
                    animate_markers,
                    color_markers,
                )
                    .chain(),
            );
    }
}
