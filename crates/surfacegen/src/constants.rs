/// Phase added to every orbiter per tick, independent of frame time.
pub const ORBIT_PHASE_STEP: f32 = 0.01;
/// Euler angle added to a spinning orbiter about X and Y per tick.
pub const ORBIT_SPIN_STEP: f32 = 0.01;
/// Orbiters start with a phase drawn from `0.0..ORBIT_PHASE_JITTER`.
pub const ORBIT_PHASE_JITTER: f32 = 100.0;
/// Horizontal spacing of the settled marker row.
pub const SETTLE_SPACING: f32 = 2.5;
pub const SETTLE_HEIGHT: f32 = -2.0;
pub const SETTLE_DEPTH: f32 = 5.0;

/// Ocean time accumulated per tick.
pub const OCEAN_TIME_STEP: f32 = 0.001;
pub const OCEAN_EXTENT: f32 = 100.0;
pub const OCEAN_SEGMENTS: usize = 64;

pub const TERRAIN_GRID_SIZE: usize = 50;
pub const TERRAIN_EXTENT: f32 = 20.0;
/// Lowers the whole terrain field.
pub const TERRAIN_BASE_HEIGHT: f32 = 3.5;
/// Temperature at which the terrain relief doubles.
pub const TERRAIN_TEMPERATURE_SCALE: f32 = 50.0;
/// Radians per second of elapsed wall time.
pub const TERRAIN_SPIN_RATE: f32 = 0.05;
pub const DEFAULT_TEMPERATURE_C: f32 = 20.0;

pub const PULSE_DELAY_MS: u64 = 10_000;
pub const PULSE_STEP_MS: u64 = 250;
pub const SHUDDER_DURATION_MS: u64 = 150;
/// Orbiting stops by itself this long after start.
pub const ORBIT_AUTO_STOP_MS: u64 = 15_000;
