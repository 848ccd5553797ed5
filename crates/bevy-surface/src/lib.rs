//! # Bevy Surface Crate
//!
//! Turns `surfacegen` heightfields into Bevy meshes and materials.
//!
//! ## Usage
//! ```no_run
//! use bevy::prelude::*;
//! use bevy_surface::*;
//! use surfacegen::grid::GridLayout;
//! use surfacegen::mesh_data::MeshData;
//! use surfacegen::ocean::OceanWaves;
//!
//! fn setup(
//!     mut commands: Commands,
//!     mut meshes: ResMut<Assets<Mesh>>,
//!     mut materials: ResMut<Assets<StandardMaterial>>,
//! ) {
//!     let layout = GridLayout::from_segments(64, 100.0);
//!     let field = OceanWaves::default().initial(&layout);
//!
//!     let surface = SurfaceMeshBuilder::new(SurfaceStyle::ocean())
//!         .build(&MeshData::from_field(&layout, &field));
//!
//!     commands.spawn((
//!         Mesh3d(meshes.add(surface.mesh)),
//!         MeshMaterial3d(materials.add(surface.material)),
//!     ));
//! }
//! ```

use bevy::asset::RenderAssetUsages;
use bevy::color::{Alpha, Color};
use bevy::mesh::{Indices, Mesh, PrimitiveTopology};
use bevy::pbr::StandardMaterial;
use bevy::prelude::AlphaMode;
use surfacegen::grid::GridLayout;
use surfacegen::mesh_data::{MeshData, line_indices};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceTopology {
    /// Shaded triangles
    Solid,
    /// Every grid edge drawn as a line
    Wireframe,
}

/// How a surface is drawn
#[derive(Debug, Clone, Copy)]
pub struct SurfaceStyle {
    pub color: Color,
    pub topology: SurfaceTopology,
    pub opacity: f32,
    pub roughness: f32,
    pub metallic: f32,
    pub unlit: bool,
}

impl SurfaceStyle {
    pub fn ocean() -> Self {
        Self {
            color: Color::srgb_u8(0x04, 0x55, 0xaa),
            topology: SurfaceTopology::Solid,
            opacity: 1.0,
            roughness: 0.8,
            metallic: 0.2,
            unlit: false,
        }
    }

    /// Blue line grid
    pub fn terrain() -> Self {
        Self {
            color: Color::srgb_u8(0x3b, 0x82, 0xf6),
            topology: SurfaceTopology::Wireframe,
            opacity: 1.0,
            roughness: 1.0,
            metallic: 0.0,
            unlit: true,
        }
    }

    /// Opaque floor below the ocean
    pub fn floor() -> Self {
        Self {
            color: Color::srgb_u8(0x11, 0x2d, 0x5c),
            topology: SurfaceTopology::Solid,
            opacity: 1.0,
            roughness: 1.0,
            metallic: 0.0,
            unlit: false,
        }
    }
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self::ocean()
    }
}

/// The output of surface generation - ready to render
pub struct SurfaceOutput {
    pub mesh: Mesh,
    pub material: StandardMaterial,
}

pub struct SurfaceMeshBuilder {
    style: SurfaceStyle,
    layout: Option<GridLayout>,
}

impl SurfaceMeshBuilder {
    pub fn new(style: SurfaceStyle) -> Self {
        Self {
            style,
            layout: None,
        }
    }

    /// Grid the mesh data was built on. Required for wireframe surfaces.
    pub fn with_layout(mut self, layout: GridLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn build(self, data: &MeshData) -> SurfaceOutput {
        let mesh = self.generate_mesh(data);
        let material = self.generate_material();

        SurfaceOutput { mesh, material }
    }

    fn generate_mesh(&self, data: &MeshData) -> Mesh {
        let (topology, indices) = match (self.style.topology, self.layout) {
            (SurfaceTopology::Wireframe, Some(layout)) => {
                (PrimitiveTopology::LineList, line_indices(&layout))
            }
            _ => (PrimitiveTopology::TriangleList, data.indices.clone()),
        };

        let mut mesh = Mesh::new(topology, RenderAssetUsages::default());
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, data.positions.clone());
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, data.normals.clone());
        mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, data.uvs.clone());
        mesh.insert_indices(Indices::U32(indices));

        mesh
    }

    fn generate_material(&self) -> StandardMaterial {
        let alpha_mode = if self.style.opacity < 1.0 {
            AlphaMode::Blend
        } else {
            AlphaMode::Opaque
        };

        StandardMaterial {
            base_color: self.style.color.with_alpha(self.style.opacity),
            metallic: self.style.metallic,
            perceptual_roughness: self.style.roughness,
            alpha_mode,
            unlit: self.style.unlit,
            double_sided: true,
            cull_mode: None,
            ..Default::default()
        }
    }
}

/// Replace positions and normals of an existing mesh in place.
/// Indices are left alone, so the vertex count must not change.
pub fn apply_mesh_data(mesh: &mut Mesh, data: &MeshData) {
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, data.positions.clone());
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, data.normals.clone());
}
