pub mod logic;
pub mod resources;
mod systems;

use crate::scene::logic::SceneControls;
use crate::scene::resources::*;
use crate::scene::systems::*;
use bevy::prelude::*;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneControls>()
            .init_resource::<SceneCues>()
            .add_systems(Startup, (setup_lighting, schedule_scene_cues))
            .add_systems(Update, (run_scene_cues, close_panel_on_escape));
    }
}
