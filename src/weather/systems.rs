use crate::scene::resources::SceneSettings;
use crate::weather::fetch::fetch_temperature;
use crate::weather::logic::{TemperatureCell, TerrainReading, WeatherError};
use bevy::log::{info, warn};
use bevy::prelude::*;
use bevy::tasks::{IoTaskPool, Task, block_on, futures_lite::future};

/// Current terrain temperature, changed exactly once when the fetch resolves
#[derive(Resource, Deref)]
pub struct TerrainTemperature(pub TemperatureCell);

impl FromWorld for TerrainTemperature {
    fn from_world(world: &mut World) -> Self {
        let default_celsius = world
            .get_resource::<SceneSettings>()
            .map(|settings| settings.terrain.default_temperature)
            .unwrap_or(surfacegen::constants::DEFAULT_TEMPERATURE_C);
        Self(TemperatureCell::new(default_celsius))
    }
}

#[derive(Resource)]
pub struct WeatherTask(Task<Result<f32, WeatherError>>);

pub fn start_weather_fetch(mut commands: Commands, settings: Res<SceneSettings>) {
    let config = settings.weather.clone();
    #[cfg(not(target_arch = "wasm32"))]
    let task = IoTaskPool::get().spawn(async move { fetch_temperature(&config) });
    #[cfg(target_arch = "wasm32")]
    let task = IoTaskPool::get().spawn(fetch_temperature(config));
    commands.insert_resource(WeatherTask(task));

    info!("Weather fetch started");
}

pub fn poll_weather_fetch(
    mut commands: Commands,
    task: Option<ResMut<WeatherTask>>,
    settings: Res<SceneSettings>,
    mut temperature: ResMut<TerrainTemperature>,
) {
    let Some(mut task) = task else {
        return;
    };
    let Some(result) = block_on(future::poll_once(&mut task.0)) else {
        return;
    };
    commands.remove_resource::<WeatherTask>();

    let reading = TerrainReading::resolve(result, settings.terrain.default_temperature);
    match reading.failure() {
        Some(err) => warn!("Weather unavailable ({}), using {} °C", err, reading.celsius),
        None => info!("Current temperature {} °C", reading.celsius),
    }

    if !temperature.0.commit(reading) {
        warn!("Temperature already committed, ignoring late reading");
    }
}
