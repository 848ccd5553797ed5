use crate::core::camera::logic::OrbitRig;
use bevy::prelude::*;
use surfacegen::spring::Spring;

#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct MainCamera;

/// Spring that carries the camera from its start point to the explore position
#[derive(Component)]
pub struct IntroFlight {
    pub spring: Spring,
}

/// Orbit controls used once the intro has finished
#[derive(Component, Default)]
pub struct OrbitControls {
    pub rig: OrbitRig,
}
