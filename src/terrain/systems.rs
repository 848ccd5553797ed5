use crate::scene::resources::SceneSettings;
use crate::weather::systems::TerrainTemperature;
use bevy::log::info;
use bevy::prelude::*;
use bevy_surface::{SurfaceMeshBuilder, SurfaceStyle, apply_mesh_data};
use surfacegen::mesh_data::MeshData;
use surfacegen::terrain::TerrainSurface;

#[derive(Component)]
pub struct TerrainEntity {
    pub spin_rate: f32,
}

#[derive(Resource)]
pub struct TerrainMesh {
    pub surface: TerrainSurface,
    pub mesh: Handle<Mesh>,
}

pub fn spawn_terrain(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<SceneSettings>,
    temperature: Res<TerrainTemperature>,
) {
    let config = &settings.terrain;
    let layout = config.layout();
    let surface = TerrainSurface::new(config.shape, layout, temperature.reading().input());
    let data = MeshData::from_field(&layout, surface.field());

    let terrain = SurfaceMeshBuilder::new(SurfaceStyle::terrain())
        .with_layout(layout)
        .build(&data);
    let mesh = meshes.add(terrain.mesh);

    commands.spawn((
        Mesh3d(mesh.clone()),
        MeshMaterial3d(materials.add(terrain.material)),
        Transform::default(),
        TerrainEntity {
            spin_rate: config.spin_rate,
        },
    ));
    commands.insert_resource(TerrainMesh { surface, mesh });
}

/// Regenerate the heightfield only when the temperature reading changes
pub fn reshape_terrain(
    temperature: Res<TerrainTemperature>,
    terrain: Option<ResMut<TerrainMesh>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    if !temperature.is_changed() {
        return;
    }
    let Some(mut terrain) = terrain else {
        return;
    };

    let input = temperature.reading().input();
    if !terrain.surface.update(input) {
        return;
    }

    let data = MeshData::from_field(terrain.surface.layout(), terrain.surface.field());
    if let Some(mesh) = meshes.get_mut(&terrain.mesh) {
        apply_mesh_data(mesh, &data);
    }
    info!("Terrain reshaped for {} °C", input.temperature_celsius);
}

/// Rotation follows elapsed time, independent of reshaping
pub fn spin_terrain(time: Res<Time>, mut terrain_q: Query<(&TerrainEntity, &mut Transform)>) {
    let elapsed = time.elapsed_secs();
    for (terrain, mut transform) in terrain_q.iter_mut() {
        transform.rotation = Quat::from_rotation_y(elapsed * terrain.spin_rate);
    }
}
