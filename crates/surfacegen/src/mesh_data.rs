use crate::grid::{GridField, GridLayout};
use glam::Vec3;

/// Raw mesh data that can be used by any rendering engine
#[derive(Debug, Clone)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    /// Triangle list, wound counter-clockwise when seen from +Y
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Displace a flat grid along +Y by `field`
    pub fn from_field(layout: &GridLayout, field: &GridField) -> Self {
        let mut positions = Vec::with_capacity(layout.len());
        let mut uvs = Vec::with_capacity(layout.len());
        let u_span = layout.columns.saturating_sub(1).max(1) as f32;
        let v_span = layout.rows.saturating_sub(1).max(1) as f32;

        for gy in 0..layout.rows {
            for gx in 0..layout.columns {
                let p = layout.planar(gx, gy);
                let h = field.get(gx, gy).unwrap_or(0.0);
                positions.push([p.x, h, p.y]);
                uvs.push([gx as f32 / u_span, gy as f32 / v_span]);
            }
        }

        let indices = triangle_indices(layout);
        let normals = vertex_normals(&positions, &indices);

        MeshData {
            positions,
            normals,
            uvs,
            indices,
        }
    }

    /// Overwrite heights from a freshly evaluated field and recompute all normals
    pub fn apply_field(&mut self, layout: &GridLayout, field: &GridField) {
        for gy in 0..layout.rows {
            for gx in 0..layout.columns {
                if let Some(position) = self.positions.get_mut(layout.index(gx, gy)) {
                    position[1] = field.get(gx, gy).unwrap_or(0.0);
                }
            }
        }
        self.normals = vertex_normals(&self.positions, &self.indices);
    }
}

/// Two triangles per grid quad
pub fn triangle_indices(layout: &GridLayout) -> Vec<u32> {
    let mut indices = Vec::new();
    if layout.columns < 2 || layout.rows < 2 {
        return indices;
    }

    let stride = layout.columns as u32;
    for y in 0..(layout.rows as u32 - 1) {
        for x in 0..(stride - 1) {
            let i0 = y * stride + x;
            let i1 = i0 + 1;
            let i2 = i0 + stride;
            let i3 = i2 + 1;

            indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
        }
    }
    indices
}

/// Line list covering every triangle edge of the grid once
pub fn line_indices(layout: &GridLayout) -> Vec<u32> {
    let mut indices = Vec::new();
    let stride = layout.columns as u32;
    let rows = layout.rows as u32;

    for y in 0..rows {
        for x in 0..stride {
            let i = y * stride + x;
            if x + 1 < stride {
                indices.extend_from_slice(&[i, i + 1]);
            }
            if y + 1 < rows {
                indices.extend_from_slice(&[i, i + stride]);
            }
            // quad diagonal shared by both triangles
            if x + 1 < stride && y + 1 < rows {
                indices.extend_from_slice(&[i + 1, i + stride]);
            }
        }
    }
    indices
}

/// Area-weighted smooth normals accumulated from every triangle
pub fn vertex_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut accumulated = vec![Vec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let (Some(pa), Some(pb), Some(pc)) = (positions.get(a), positions.get(b), positions.get(c))
        else {
            continue;
        };
        let pa = Vec3::from(*pa);
        let face = (Vec3::from(*pb) - pa).cross(Vec3::from(*pc) - pa);
        accumulated[a] += face;
        accumulated[b] += face;
        accumulated[c] += face;
    }

    accumulated
        .into_iter()
        .map(|n| n.try_normalize().unwrap_or(Vec3::Y).to_array())
        .collect()
}
