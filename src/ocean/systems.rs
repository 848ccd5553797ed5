use crate::scene::resources::SceneSettings;
use bevy::log::info;
use bevy::prelude::*;
use bevy_surface::{SurfaceMeshBuilder, SurfaceStyle, apply_mesh_data};
use surfacegen::grid::{GridField, GridLayout};
use surfacegen::mesh_data::MeshData;
use surfacegen::ocean::{OceanClock, OceanWaves};

#[derive(Component)]
pub struct OceanEntity;

/// Wave field state and the mesh it is written into every frame
#[derive(Resource)]
pub struct OceanSurface {
    pub layout: GridLayout,
    pub waves: OceanWaves,
    pub clock: OceanClock,
    pub data: MeshData,
    pub mesh: Handle<Mesh>,
}

pub fn spawn_ocean(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<SceneSettings>,
) {
    let config = &settings.ocean;
    let layout = config.layout();
    let waves = config.waves;
    let data = MeshData::from_field(&layout, &waves.initial(&layout));

    let ocean = SurfaceMeshBuilder::new(SurfaceStyle::ocean()).build(&data);
    let mesh = meshes.add(ocean.mesh);

    commands.spawn((
        Mesh3d(mesh.clone()),
        MeshMaterial3d(materials.add(ocean.material)),
        Transform::from_xyz(0.0, config.elevation, 0.0),
        OceanEntity,
    ));

    // flat floor so the horizon never shows the background through the waves
    let floor_layout = GridLayout::square(2, config.floor_extent);
    let floor_data = MeshData::from_field(&floor_layout, &GridField::from_fn(2, 2, |_, _| 0.0));
    let floor = SurfaceMeshBuilder::new(SurfaceStyle::floor()).build(&floor_data);
    commands.spawn((
        Mesh3d(meshes.add(floor.mesh)),
        MeshMaterial3d(materials.add(floor.material)),
        Transform::from_xyz(0.0, config.floor_elevation, 0.0),
        OceanEntity,
    ));

    commands.insert_resource(OceanSurface {
        layout,
        waves,
        clock: OceanClock::new(config.time_step),
        data,
        mesh,
    });

    info!("Ocean spawned with {} vertices", layout.len());
}

/// Re-evaluate every vertex and its normal once per frame
pub fn animate_ocean(surface: Option<ResMut<OceanSurface>>, mut meshes: ResMut<Assets<Mesh>>) {
    let Some(mut surface) = surface else {
        return;
    };

    let t = surface.clock.tick();
    let field = surface.waves.evaluate(&surface.layout, t);
    let layout = surface.layout;
    surface.data.apply_field(&layout, &field);

    if let Some(mesh) = meshes.get_mut(&surface.mesh) {
        apply_mesh_data(mesh, &surface.data);
    }
}
