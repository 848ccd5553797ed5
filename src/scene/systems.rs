use crate::scene::logic::{SceneControls, SceneCue};
use crate::scene::resources::{SceneCues, SceneSettings};
use bevy::light::{AmbientLight, DirectionalLight, PointLight};
use bevy::log::info;
use bevy::prelude::*;

pub fn setup_lighting(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        PointLight {
            intensity: 400_000.0,
            range: 40.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(-5.0, 10.0, -5.0),
    ));
}

pub fn schedule_scene_cues(mut cues: ResMut<SceneCues>, settings: Res<SceneSettings>) {
    cues.timeline
        .schedule(settings.timing.orbit_auto_stop_ms, SceneCue::StopOrbit);
}

pub fn run_scene_cues(
    time: Res<Time>,
    mut cues: ResMut<SceneCues>,
    mut controls: ResMut<SceneControls>,
) {
    let now_ms = time.elapsed().as_millis() as u64;
    for cue in cues.timeline.drain_due(now_ms) {
        controls.apply(cue);
        info!("Scene cue {:?} fired at {} ms", cue, now_ms);
    }
}

pub fn close_panel_on_escape(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut controls: ResMut<SceneControls>,
) {
    if keyboard_input.just_pressed(KeyCode::Escape) {
        controls.close_section();
    }
}
