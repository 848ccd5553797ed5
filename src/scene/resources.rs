use crate::scene::logic::SceneCue;
use bevy::prelude::{Deref, Resource};
use surfacegen::config::SceneGenConfig;
use surfacegen::timeline::Timeline;

/// Scene configuration, read once from `scene_config.toml` at startup
#[derive(Resource, Deref, Clone)]
pub struct SceneSettings(pub SceneGenConfig);

impl Default for SceneSettings {
    fn default() -> Self {
        Self(surfacegen::get_config())
    }
}

#[derive(Resource, Default)]
pub struct SceneCues {
    pub timeline: Timeline<SceneCue>,
}
