pub(crate) mod components;
pub(crate) mod logic;
mod systems;

use crate::core::camera::components::*;
use crate::core::camera::systems::*;
use crate::core::state::ScenePhase;
use bevy::prelude::*;

pub(crate) struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<MainCamera>()
            .add_systems(Startup, spawn_camera)
            .add_systems(OnEnter(ScenePhase::Intro), restart_intro)
            .add_systems(Update, fly_intro.run_if(in_state(ScenePhase::Intro)))
            .add_systems(Update, camera_control.run_if(in_state(ScenePhase::Explore)));
    }
}
