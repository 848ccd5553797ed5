use crate::constants::*;
use crate::grid::GridLayout;
use crate::ocean::OceanWaves;
use crate::orbit::{OrbitParameters, settle_slot};
use crate::pulse::PulseTiming;
use crate::spring::SpringConfig;
use crate::terrain::TerrainShape;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use thiserror::Error;

pub const CONFIG_PATH: &str = "scene_config.toml";

static CONFIG: OnceLock<Mutex<SceneGenConfig>> = OnceLock::new();

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Get a copy of the current configuration, loading it on first use.
/// A missing or broken file falls back to the built-in defaults.
pub fn get_config() -> SceneGenConfig {
    let config_mutex = CONFIG.get_or_init(|| Mutex::new(load_or_default(CONFIG_PATH)));
    match config_mutex.lock() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

fn load_or_default(path: &str) -> SceneGenConfig {
    match SceneGenConfig::load_from_file(path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Using default scene config, {path} not loaded: {err}");
            SceneGenConfig::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneGenConfig {
    pub orbit: OrbitConfig,
    pub ocean: OceanConfig,
    pub terrain: TerrainConfig,
    pub weather: WeatherConfig,
    pub timing: TimingConfig,
    pub camera: CameraConfig,
    pub sections: Vec<SectionConfig>,
}

impl Default for SceneGenConfig {
    fn default() -> Self {
        Self {
            orbit: OrbitConfig::default(),
            ocean: OceanConfig::default(),
            terrain: TerrainConfig::default(),
            weather: WeatherConfig::default(),
            timing: TimingConfig::default(),
            camera: CameraConfig::default(),
            sections: default_sections(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    pub phase_step: f32,
    pub spin_step: f32,
    pub settle_spacing: f32,
    pub settle_height: f32,
    pub settle_depth: f32,
    pub settle_spring: SpringConfig,
    pub shudder_spring: SpringConfig,
    pub pulse_spring: SpringConfig,
    pub hover_spring: SpringConfig,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            phase_step: ORBIT_PHASE_STEP,
            spin_step: ORBIT_SPIN_STEP,
            settle_spacing: SETTLE_SPACING,
            settle_height: SETTLE_HEIGHT,
            settle_depth: SETTLE_DEPTH,
            settle_spring: SpringConfig::new(1.0, 120.0, 14.0),
            shudder_spring: SpringConfig::new(1.0, 200.0, 10.0).with_precision(0.001),
            pulse_spring: SpringConfig::new(1.0, 100.0, 10.0),
            hover_spring: SpringConfig::WOBBLY,
        }
    }
}

impl OrbitConfig {
    pub fn settle_slot(&self, index: usize, count: usize) -> Vec3 {
        settle_slot(
            index,
            count,
            self.settle_spacing,
            self.settle_height,
            self.settle_depth,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionConfig {
    pub id: String,
    pub label: String,
    pub radius: f32,
    pub speed: f32,
}

impl SectionConfig {
    pub fn new(id: &str, label: &str, radius: f32, speed: f32) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            radius,
            speed,
        }
    }

    pub fn orbit_parameters(&self, phase_offset: f32) -> OrbitParameters {
        OrbitParameters::new(self.radius, self.speed, phase_offset)
    }
}

pub fn default_sections() -> Vec<SectionConfig> {
    vec![
        SectionConfig::new("about", "About", 5.0, 0.5),
        SectionConfig::new("experience", "Experience", 4.0, 0.3),
        SectionConfig::new("skills", "Skills", 6.0, 0.7),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OceanConfig {
    pub extent: f32,
    pub segments: usize,
    pub time_step: f32,
    /// Vertical offset of the wave surface
    pub elevation: f32,
    /// Flat floor drawn just under the waves
    pub floor_extent: f32,
    pub floor_elevation: f32,
    pub waves: OceanWaves,
}

impl Default for OceanConfig {
    fn default() -> Self {
        Self {
            extent: OCEAN_EXTENT,
            segments: OCEAN_SEGMENTS,
            time_step: OCEAN_TIME_STEP,
            elevation: -4.0,
            floor_extent: 200.0,
            floor_elevation: -4.1,
            waves: OceanWaves::default(),
        }
    }
}

impl OceanConfig {
    pub fn layout(&self) -> GridLayout {
        GridLayout::from_segments(self.segments, self.extent)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub grid_size: usize,
    pub extent: f32,
    pub shape: TerrainShape,
    /// Radians per second around the vertical axis
    pub spin_rate: f32,
    pub default_temperature: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            grid_size: TERRAIN_GRID_SIZE,
            extent: TERRAIN_EXTENT,
            shape: TerrainShape::default(),
            spin_rate: TERRAIN_SPIN_RATE,
            default_temperature: DEFAULT_TEMPERATURE_C,
        }
    }
}

impl TerrainConfig {
    pub fn layout(&self) -> GridLayout {
        GridLayout::square(self.grid_size, self.extent)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub endpoint: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timeout_secs: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.open-meteo.com/v1/forecast".to_string(),
            latitude: 51.5074,
            longitude: -0.1278,
            timeout_secs: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub pulse: PulseTiming,
    pub shudder_ms: u64,
    pub orbit_auto_stop_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            pulse: PulseTiming::default(),
            shudder_ms: SHUDDER_DURATION_MS,
            orbit_auto_stop_ms: ORBIT_AUTO_STOP_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub intro_start: [f32; 3],
    pub intro_end: [f32; 3],
    pub intro_spring: SpringConfig,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Fraction of orbit velocity lost per frame
    pub damping: f32,
    pub rotate_speed: f32,
    pub pan_speed: f32,
    pub zoom_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            intro_start: [0.0, 30.0, 0.0],
            intro_end: [0.0, -2.0, 10.0],
            intro_spring: SpringConfig::new(1.0, 20.0, 30.0),
            min_distance: 2.0,
            max_distance: 30.0,
            damping: 0.05,
            rotate_speed: 0.005,
            pan_speed: 0.01,
            zoom_speed: 0.5,
        }
    }
}

impl SceneGenConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: SceneGenConfig = toml::from_str(content)?;
        if config.sections.is_empty() {
            config.sections = default_sections();
        }
        Ok(config)
    }
}
