use crate::core::camera::components::{IntroFlight, MainCamera, OrbitControls};
use crate::core::camera::logic::{
    OrbitInput, OrbitLimits, OrbitRig, calculate_orbit_update, intro_spring,
};
use crate::core::state::ScenePhase;
use crate::scene::logic::SceneControls;
use crate::scene::resources::SceneSettings;
use crate::ui::UiPointerCapture;
use bevy::input::ButtonInput;
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::log::info;
use bevy::math::{Vec2, Vec3};
use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;

/// Pixel scroll deltas are scaled down to roughly one wheel notch
const PIXELS_PER_LINE: f32 = 100.0;

pub fn spawn_camera(mut commands: Commands, settings: Res<SceneSettings>) {
    let spring = intro_spring(&settings.camera);

    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(spring.value()).looking_at(Vec3::ZERO, Vec3::Y),
        DistanceFog {
            color: Color::srgb_u8(0xf7, 0xfa, 0xfc),
            falloff: FogFalloff::Linear {
                start: 10.0,
                end: 25.0,
            },
            ..default()
        },
        MainCamera,
        IntroFlight { spring },
        OrbitControls::default(),
    ));

    info!("Camera spawned");
}

/// Put the camera back at the top of its flight whenever the intro (re)starts
pub fn restart_intro(
    settings: Res<SceneSettings>,
    mut camera_q: Query<(&mut Transform, &mut IntroFlight), With<MainCamera>>,
) {
    let Ok((mut transform, mut flight)) = camera_q.single_mut() else {
        return;
    };

    flight.spring = intro_spring(&settings.camera);
    *transform = Transform::from_translation(flight.spring.value()).looking_at(Vec3::ZERO, Vec3::Y);
}

pub fn fly_intro(
    time: Res<Time>,
    mut camera_q: Query<(&mut Transform, &mut IntroFlight, &mut OrbitControls), With<MainCamera>>,
    mut controls: ResMut<SceneControls>,
    mut next_state: ResMut<NextState<ScenePhase>>,
) {
    let Ok((mut transform, mut flight, mut orbit)) = camera_q.single_mut() else {
        return;
    };

    let rested = flight.spring.step(time.delta_secs());
    *transform = Transform::from_translation(flight.spring.value()).looking_at(Vec3::ZERO, Vec3::Y);

    if rested {
        orbit.rig = OrbitRig::from_position(transform.translation, Vec3::ZERO);
        controls.finish_intro();
        next_state.set(ScenePhase::Explore);
        info!("Intro finished, orbit controls enabled");
    }
}

pub fn camera_control(
    mouse_input: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut mouse_wheel: MessageReader<MouseWheel>,
    pointer_capture: Res<UiPointerCapture>,
    settings: Res<SceneSettings>,
    mut camera_q: Query<(&mut Transform, &mut OrbitControls), With<MainCamera>>,
) {
    let Ok((mut transform, mut orbit)) = camera_q.single_mut() else {
        return;
    };

    let mut mouse_delta = Vec2::ZERO;
    for ev in mouse_motion.read() {
        mouse_delta += ev.delta;
    }

    let mut wheel_delta = 0.0;
    for ev in mouse_wheel.read() {
        wheel_delta += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y / PIXELS_PER_LINE,
        };
    }

    // drags that start on a panel belong to egui
    let captured = pointer_capture.0;
    let input = OrbitInput {
        rotate_pressed: !captured && mouse_input.pressed(MouseButton::Left),
        pan_pressed: !captured && mouse_input.pressed(MouseButton::Right),
        mouse_delta,
        wheel_delta: if captured { 0.0 } else { wheel_delta },
    };

    let limits = OrbitLimits::from(&settings.camera);
    orbit.rig = calculate_orbit_update(&orbit.rig, &input, &limits);

    *transform = Transform::from_translation(orbit.rig.position()).looking_at(orbit.rig.focus, Vec3::Y);
}
