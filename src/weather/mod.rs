mod fetch;
pub mod logic;
pub mod systems;

use crate::weather::systems::*;
use bevy::prelude::*;

pub struct WeatherPlugin;

impl Plugin for WeatherPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TerrainTemperature>()
            .add_systems(Startup, start_weather_fetch)
            .add_systems(Update, poll_weather_fetch);
    }
}
