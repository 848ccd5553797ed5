use crate::markers::components::*;
use crate::markers::events::MarkerClicked;
use crate::markers::logic::{advance_spin, marker_color, marker_rotation, scale_target};
use crate::scene::logic::SceneControls;
use crate::scene::resources::SceneSettings;
use bevy::log::info;
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;
use surfacegen::orbit::OrbitState;
use surfacegen::pulse::PulseSequence;
use surfacegen::shudder::Shudder;
use surfacegen::spring::Spring;
use surfacegen::tools::random_phase_offset;

fn now_ms(time: &Time) -> u64 {
    time.elapsed().as_millis() as u64
}

pub fn spawn_markers(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<SceneSettings>,
    time: Res<Time>,
) {
    let created_at = now_ms(&time);
    let count = settings.sections.len();
    let mesh = meshes.add(Cuboid::new(1.0, 1.0, 1.0));

    for (index, section) in settings.sections.iter().enumerate() {
        let params = section.orbit_parameters(random_phase_offset());
        let state = OrbitState::new(&params);
        let slot = settings.orbit.settle_slot(index, count);

        let material = materials.add(StandardMaterial {
            base_color: marker_color(false, false),
            perceptual_roughness: 0.3,
            metallic: 0.4,
            ..default()
        });

        commands
            .spawn((
                Mesh3d(mesh.clone()),
                MeshMaterial3d(material),
                Transform::from_translation(state.current_position),
                Marker {
                    id: section.id.clone(),
                    label: section.label.clone(),
                },
                Orbiter {
                    params,
                    state,
                    slot,
                },
                MarkerMotion {
                    position: Spring::new(state.current_position, settings.orbit.settle_spring),
                    scale: Spring::new(Vec3::ONE, settings.orbit.hover_spring),
                    tilt: Spring::new(Vec3::ZERO, settings.orbit.shudder_spring),
                    spin: Vec2::ZERO,
                },
                MarkerPulse(PulseSequence::new(created_at, settings.timing.pulse)),
                MarkerShudder(Shudder::new(settings.timing.shudder_ms)),
                Hovered::default(),
            ))
            .observe(on_marker_click)
            .observe(on_marker_over)
            .observe(on_marker_out);
    }

    info!("Spawned {} markers", count);
}

fn on_marker_click(click: On<Pointer<Click>>, mut clicks: MessageWriter<MarkerClicked>) {
    if click.button == PointerButton::Primary {
        clicks.write(MarkerClicked {
            marker: click.entity,
        });
    }
}

fn on_marker_over(over: On<Pointer<Over>>, mut hovered: Query<&mut Hovered>) {
    if let Ok(mut hovered) = hovered.get_mut(over.entity) {
        hovered.0 = true;
    }
}

fn on_marker_out(out: On<Pointer<Out>>, mut hovered: Query<&mut Hovered>) {
    if let Ok(mut hovered) = hovered.get_mut(out.entity) {
        hovered.0 = false;
    }
}

pub fn handle_marker_clicks(
    time: Res<Time>,
    mut clicks: MessageReader<MarkerClicked>,
    mut controls: ResMut<SceneControls>,
    mut markers: Query<(&Marker, &mut MarkerShudder)>,
) {
    for click in clicks.read() {
        let Ok((marker, mut shudder)) = markers.get_mut(click.marker) else {
            continue;
        };
        shudder.0.trigger(now_ms(&time));
        controls.toggle_section(&marker.id);
        info!("Marker {} clicked, open section: {:?}", marker.id, controls.active_section());
    }
}

/// One fixed phase step per frame, independent of frame time
pub fn advance_orbits(
    controls: Res<SceneControls>,
    settings: Res<SceneSettings>,
    mut orbiters: Query<&mut Orbiter>,
) {
    let step = settings.orbit.phase_step;
    for mut orbiter in orbiters.iter_mut() {
        let slot = orbiter.slot;
        let params = orbiter.params;
        orbiter.state = orbiter
            .state
            .with_orbiting(controls.orbiting())
            .advance(&params, step, slot);
    }
}

pub fn animate_markers(
    time: Res<Time>,
    controls: Res<SceneControls>,
    settings: Res<SceneSettings>,
    mut markers: Query<(
        &Orbiter,
        &Hovered,
        &mut MarkerMotion,
        &mut MarkerPulse,
        &mut MarkerShudder,
        &mut Transform,
    )>,
) {
    let now = now_ms(&time);
    let dt = time.delta_secs();

    for (orbiter, hovered, mut motion, mut pulse, mut shudder, mut transform) in markers.iter_mut() {
        let pulsing = pulse.0.advance(now);
        let shuddering = shudder.0.update(now);

        motion.spin = advance_spin(
            motion.spin,
            controls.orbiting(),
            shuddering,
            settings.orbit.spin_step,
        );

        let (scale, scale_config) = scale_target(pulsing, hovered.0, &settings.orbit);
        motion.scale.set_config(scale_config);
        motion.scale.set_target(Vec3::splat(scale));
        motion.scale.step(dt);

        motion.tilt.set_target(shudder.0.target_offset(now));
        motion.tilt.step(dt);

        motion.position.set_target(orbiter.state.current_position);
        motion.position.step(dt);

        transform.translation = motion.position.value();
        transform.scale = motion.scale.value();
        transform.rotation = marker_rotation(motion.spin, motion.tilt.value());
    }
}

pub fn color_markers(
    controls: Res<SceneControls>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    markers: Query<(&Marker, &Hovered, &MeshMaterial3d<StandardMaterial>)>,
) {
    for (marker, hovered, material) in markers.iter() {
        let color = marker_color(controls.is_active(&marker.id), hovered.0);
        let Some(current) = materials.get(&material.0) else {
            continue;
        };
        // get_mut marks the asset as modified, so only take it on a real change
        if current.base_color != color {
            if let Some(current) = materials.get_mut(&material.0) {
                current.base_color = color;
            }
        }
    }
}
