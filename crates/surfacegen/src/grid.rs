use glam::Vec2;

/// Regular grid of vertices on the XZ plane, centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
    pub extent_x: f32,
    pub extent_z: f32,
}

impl GridLayout {
    pub fn new(columns: usize, rows: usize, extent_x: f32, extent_z: f32) -> Self {
        Self {
            columns: columns.max(1),
            rows: rows.max(1),
            extent_x,
            extent_z,
        }
    }

    /// Square grid with `vertices_per_side` vertices along each axis
    pub fn square(vertices_per_side: usize, extent: f32) -> Self {
        Self::new(vertices_per_side, vertices_per_side, extent, extent)
    }

    /// Square grid described by its number of quads per side
    pub fn from_segments(segments: usize, extent: f32) -> Self {
        Self::square(segments + 1, extent)
    }

    pub fn len(&self) -> usize {
        self.columns * self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn index(&self, gx: usize, gy: usize) -> usize {
        gy * self.columns + gx
    }

    /// Planar (x, z) coordinate of the vertex at grid cell (gx, gy)
    pub fn planar(&self, gx: usize, gy: usize) -> Vec2 {
        let step_x = if self.columns > 1 {
            self.extent_x / (self.columns - 1) as f32
        } else {
            0.0
        };
        let step_z = if self.rows > 1 {
            self.extent_z / (self.rows - 1) as f32
        } else {
            0.0
        };

        Vec2::new(
            -self.extent_x / 2.0 + gx as f32 * step_x,
            -self.extent_z / 2.0 + gy as f32 * step_z,
        )
    }
}

/// Row-major heightfield. Always regenerated in full, never patched.
#[derive(Debug, Clone, PartialEq)]
pub struct GridField {
    width: usize,
    height: usize,
    heights: Vec<f32>,
}

impl GridField {
    /// Sample `f(gx, gy)` for every cell, row by row.
    /// Zero dimensions are raised to one, same as `GridLayout::new`.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let mut heights = Vec::with_capacity(width * height);
        for gy in 0..height {
            for gx in 0..width {
                heights.push(f(gx, gy));
            }
        }

        Self {
            width,
            height,
            heights,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn get(&self, gx: usize, gy: usize) -> Option<f32> {
        if gx >= self.width || gy >= self.height {
            return None;
        }
        self.heights.get(gy * self.width + gx).copied()
    }

    pub fn is_finite(&self) -> bool {
        self.heights.iter().all(|h| h.is_finite())
    }
}
