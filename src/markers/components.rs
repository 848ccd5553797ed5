use bevy::prelude::*;
use surfacegen::orbit::{OrbitParameters, OrbitState};
use surfacegen::pulse::PulseSequence;
use surfacegen::shudder::Shudder;
use surfacegen::spring::Spring;

/// Clickable box standing for one content section
#[derive(Component)]
pub struct Marker {
    pub id: String,
    pub label: String,
}

#[derive(Component)]
pub struct Orbiter {
    pub params: OrbitParameters,
    pub state: OrbitState,
    /// Where the marker rests while orbiting is paused
    pub slot: Vec3,
}

/// Displayed transform, eased by springs
#[derive(Component)]
pub struct MarkerMotion {
    pub position: Spring,
    pub scale: Spring,
    /// Shudder offset added to the spin
    pub tilt: Spring,
    pub spin: Vec2,
}

#[derive(Component)]
pub struct MarkerPulse(pub PulseSequence);

#[derive(Component)]
pub struct MarkerShudder(pub Shudder);

#[derive(Component, Default)]
pub struct Hovered(pub bool);
