use crate::grid::{GridField, GridLayout};
use serde::{Deserialize, Serialize};

/// Two-term wave field: a travelling swell plus a static cross chop.
///
/// `height(x, z, t) = sin(x * swell_frequency + t) * sin(z * swell_frequency) * swell_amplitude
///                  + cos(x * chop_frequency) * cos(z * chop_frequency) * chop_amplitude`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OceanWaves {
    pub swell_amplitude: f32,
    pub swell_frequency: f32,
    pub chop_amplitude: f32,
    pub chop_frequency: f32,
}

impl Default for OceanWaves {
    fn default() -> Self {
        Self {
            swell_amplitude: 1.0,
            swell_frequency: 0.3,
            chop_amplitude: 1.5,
            chop_frequency: 0.2,
        }
    }
}

impl OceanWaves {
    pub fn height(&self, x: f32, z: f32, t: f32) -> f32 {
        (x * self.swell_frequency + t).sin() * (z * self.swell_frequency).sin() * self.swell_amplitude
            + (x * self.chop_frequency).cos() * (z * self.chop_frequency).cos() * self.chop_amplitude
    }

    /// Recompute every vertex of the grid at time `t`
    pub fn evaluate(&self, layout: &GridLayout, t: f32) -> GridField {
        GridField::from_fn(layout.columns, layout.rows, |gx, gy| {
            let p = layout.planar(gx, gy);
            self.height(p.x, p.y, t)
        })
    }

    /// Geometry shown before the first tick. Identical to `evaluate(layout, 0.0)`.
    pub fn initial(&self, layout: &GridLayout) -> GridField {
        self.evaluate(layout, 0.0)
    }
}

/// Swell-only initializer from the first version of the scene. It does not
/// match `OceanWaves::height` at t = 0 and is kept only for comparison.
pub fn legacy_initial_height(x: f32, z: f32) -> f32 {
    (x * 0.3).sin() * (z * 0.3).sin() * 2.0
}

/// Per-tick ocean time accumulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OceanClock {
    time: f32,
    step: f32,
}

impl OceanClock {
    pub fn new(step: f32) -> Self {
        Self { time: 0.0, step }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// Advance by one fixed step and return the new time
    pub fn tick(&mut self) -> f32 {
        self.time += self.step;
        self.time
    }
}
