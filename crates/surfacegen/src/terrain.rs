use crate::constants::{DEFAULT_TEMPERATURE_C, TERRAIN_BASE_HEIGHT, TERRAIN_TEMPERATURE_SCALE};
use crate::grid::{GridField, GridLayout};
use serde::{Deserialize, Serialize};

/// The single external scalar that shapes the terrain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainInput {
    pub temperature_celsius: f32,
}

impl TerrainInput {
    pub fn new(temperature_celsius: f32) -> Self {
        Self {
            temperature_celsius,
        }
    }

    /// Missing or non-finite readings fall back to the default temperature
    pub fn or_default(temperature_celsius: Option<f32>) -> Self {
        match temperature_celsius {
            Some(t) if t.is_finite() => Self::new(t),
            _ => Self::default(),
        }
    }
}

impl Default for TerrainInput {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPERATURE_C)
    }
}

/// Trigonometric pseudo-noise over integer grid coordinates
pub fn pseudo_noise(gx: usize, gy: usize) -> f32 {
    let x = gx as f32;
    let y = gy as f32;
    (x * 0.2).sin() * (y * 0.2).cos() + (x * 0.1 + y * 0.2).sin() * 0.5
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainShape {
    /// Constant the whole field is lowered by
    pub base_height: f32,
    /// Temperature at which the relief is doubled
    pub temperature_scale: f32,
}

impl Default for TerrainShape {
    fn default() -> Self {
        Self {
            base_height: TERRAIN_BASE_HEIGHT,
            temperature_scale: TERRAIN_TEMPERATURE_SCALE,
        }
    }
}

impl TerrainShape {
    pub fn height(&self, gx: usize, gy: usize, input: TerrainInput) -> f32 {
        let influence = input.temperature_celsius / self.temperature_scale;
        pseudo_noise(gx, gy) * (1.0 + influence) - self.base_height
    }

    pub fn evaluate(&self, layout: &GridLayout, input: TerrainInput) -> GridField {
        GridField::from_fn(layout.columns, layout.rows, |gx, gy| self.height(gx, gy, input))
    }
}

/// Terrain heightfield that is only regenerated when its input changes.
#[derive(Debug, Clone)]
pub struct TerrainSurface {
    shape: TerrainShape,
    layout: GridLayout,
    input: TerrainInput,
    field: GridField,
}

impl TerrainSurface {
    pub fn new(shape: TerrainShape, layout: GridLayout, input: TerrainInput) -> Self {
        let field = shape.evaluate(&layout, input);
        Self {
            shape,
            layout,
            input,
            field,
        }
    }

    pub fn input(&self) -> TerrainInput {
        self.input
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn field(&self) -> &GridField {
        &self.field
    }

    /// Regenerate the field if `input` differs from the last one.
    /// Returns whether a regeneration happened.
    pub fn update(&mut self, input: TerrainInput) -> bool {
        if input == self.input {
            return false;
        }
        self.input = input;
        self.field = self.shape.evaluate(&self.layout, input);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{TERRAIN_EXTENT, TERRAIN_GRID_SIZE};
    use rstest::rstest;

    #[rstest]
    #[case(0.0)]
    #[case(50.0)]
    #[case(DEFAULT_TEMPERATURE_C)]
    fn origin_is_only_base_height(#[case] temperature: f32) {
        let shape = TerrainShape::default();

        let h = shape.height(0, 0, TerrainInput::new(temperature));

        assert_eq!(h, -3.5);
    }

    #[test]
    fn temperature_scales_relief_of_nonzero_cells() {
        let shape = TerrainShape::default();
        let noise = pseudo_noise(5, 5);

        let cold = shape.height(5, 5, TerrainInput::new(0.0));
        let hot = shape.height(5, 5, TerrainInput::new(50.0));

        assert!(noise.abs() > 0.5);
        assert!((cold - (noise - 3.5)).abs() < 1e-5);
        assert!((hot + 3.5 - 2.0 * (cold + 3.5)).abs() < 1e-5);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(f32::NAN))]
    #[case(Some(f32::INFINITY))]
    fn unusable_readings_use_default(#[case] reading: Option<f32>) {
        assert_eq!(TerrainInput::or_default(reading).temperature_celsius, 20.0);
    }

    #[test]
    fn field_is_row_major_over_grid_cells() {
        let shape = TerrainShape::default();
        let layout = GridLayout::square(TERRAIN_GRID_SIZE, TERRAIN_EXTENT);

        let field = shape.evaluate(&layout, TerrainInput::default());

        assert_eq!(field.len(), 50 * 50);
        // heights[i] belongs to gx = i % 50, gy = i / 50
        let i = 3 * 50 + 7;
        assert_eq!(field.heights()[i], shape.height(7, 3, TerrainInput::default()));
        assert!(field.is_finite());
    }

    #[test]
    fn surface_regenerates_only_on_change() {
        let layout = GridLayout::square(TERRAIN_GRID_SIZE, TERRAIN_EXTENT);
        let mut surface = TerrainSurface::new(TerrainShape::default(), layout, TerrainInput::default());
        let before = surface.field().clone();

        assert!(!surface.update(TerrainInput::new(20.0)));
        assert_eq!(surface.field(), &before);

        assert!(surface.update(TerrainInput::new(31.0)));
        assert_ne!(surface.field(), &before);
        assert_eq!(surface.input().temperature_celsius, 31.0);
    }
}
