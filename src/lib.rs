mod core;
mod markers;
mod ocean;
mod scene;
mod terrain;
mod ui;
mod weather;

use crate::core::camera::CameraPlugin;
use crate::core::state::ScenePhase;
use crate::markers::MarkersPlugin;
use crate::ocean::OceanPlugin;
use crate::scene::ScenePlugin;
use crate::scene::resources::SceneSettings;
use crate::terrain::TerrainPlugin;
use crate::ui::UIPlugin;
use crate::weather::WeatherPlugin;
use bevy::app::App;
#[cfg(debug_assertions)]
use bevy::diagnostic::LogDiagnosticsPlugin;
use bevy::prelude::*;

pub struct PortfolioPlugin;

impl Plugin for PortfolioPlugin {
    fn build(&self, app: &mut App) {
        // every other plugin reads its tuning from here
        app.init_resource::<SceneSettings>()
            .init_state::<ScenePhase>()
            .add_plugins((
                CameraPlugin,
                ScenePlugin,
                MarkersPlugin,
                OceanPlugin,
                WeatherPlugin,
                TerrainPlugin,
                UIPlugin,
            ));

        #[cfg(debug_assertions)]
        {
            app.add_plugins(LogDiagnosticsPlugin::default());
        }
    }
}
