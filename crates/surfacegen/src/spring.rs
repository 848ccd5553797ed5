use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Integration step used internally regardless of frame time.
const SUBSTEP: f32 = 0.001;
/// Longest frame the spring will integrate in one go.
const MAX_FRAME: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub mass: f32,
    pub tension: f32,
    pub friction: f32,
    /// Distance and speed below which the spring snaps to rest
    pub precision: f32,
}

impl SpringConfig {
    pub const DEFAULT: Self = Self::new(1.0, 170.0, 26.0);
    pub const WOBBLY: Self = Self::new(1.0, 180.0, 12.0);

    pub const fn new(mass: f32, tension: f32, friction: f32) -> Self {
        Self {
            mass,
            tension,
            friction,
            precision: 0.01,
        }
    }

    pub const fn with_precision(self, precision: f32) -> Self {
        Self { precision, ..self }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Damped spring over a 3-vector, integrated with fixed substeps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    value: Vec3,
    velocity: Vec3,
    target: Vec3,
    config: SpringConfig,
}

impl Spring {
    pub fn new(value: Vec3, config: SpringConfig) -> Self {
        Self {
            value,
            velocity: Vec3::ZERO,
            target: value,
            config,
        }
    }

    pub fn value(&self) -> Vec3 {
        self.value
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn set_config(&mut self, config: SpringConfig) {
        self.config = config;
    }

    /// Teleport to `value` and stop
    pub fn jump_to(&mut self, value: Vec3) {
        self.value = value;
        self.target = value;
        self.velocity = Vec3::ZERO;
    }

    pub fn is_resting(&self) -> bool {
        self.value == self.target && self.velocity == Vec3::ZERO
    }

    /// Integrate `dt` seconds. Returns true once the spring is at rest on its target.
    pub fn step(&mut self, dt: f32) -> bool {
        if self.is_resting() {
            return true;
        }

        let mass = self.config.mass.max(f32::EPSILON);
        let mut remaining = dt.clamp(0.0, MAX_FRAME);
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP);
            let displacement = self.value - self.target;
            let force = -self.config.tension * displacement - self.config.friction * self.velocity;
            self.velocity += force / mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        let precision = self.config.precision;
        let settled = (self.value - self.target).abs().max_element() < precision
            && self.velocity.abs().max_element() < precision;
        if settled {
            self.value = self.target;
            self.velocity = Vec3::ZERO;
        }
        settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn run_until_rest(spring: &mut Spring, max_seconds: f32) -> Option<f32> {
        let dt = 1.0 / 60.0;
        let mut elapsed = 0.0;
        while elapsed < max_seconds {
            elapsed += dt;
            if spring.step(dt) {
                return Some(elapsed);
            }
        }
        None
    }

    #[rstest]
    #[case(SpringConfig::DEFAULT)]
    #[case(SpringConfig::WOBBLY)]
    #[case(SpringConfig::new(1.0, 120.0, 14.0))]
    #[case(SpringConfig::new(1.0, 200.0, 10.0).with_precision(0.001))]
    fn comes_to_rest_exactly_on_target(#[case] config: SpringConfig) {
        let mut spring = Spring::new(Vec3::ZERO, config);
        spring.set_target(Vec3::new(2.5, -2.0, 5.0));

        let rested_after = run_until_rest(&mut spring, 30.0);

        assert!(rested_after.is_some());
        assert_eq!(spring.value(), Vec3::new(2.5, -2.0, 5.0));
        assert_eq!(spring.velocity(), Vec3::ZERO);
    }

    #[test]
    fn overdamped_intro_spring_does_not_overshoot() {
        let start = Vec3::new(0.0, 30.0, 0.0);
        let end = Vec3::new(0.0, -2.0, 10.0);
        let mut spring = Spring::new(start, SpringConfig::new(1.0, 20.0, 30.0));
        spring.set_target(end);

        for _ in 0..600 {
            spring.step(1.0 / 60.0);
            assert!(spring.value().y >= end.y - 1e-3);
            assert!(spring.value().z <= end.z + 1e-3);
        }
    }

    #[test]
    fn resting_spring_ignores_steps() {
        let mut spring = Spring::new(Vec3::ONE, SpringConfig::DEFAULT);

        assert!(spring.step(1.0));
        assert_eq!(spring.value(), Vec3::ONE);
    }

    #[test]
    fn jump_to_stops_motion() {
        let mut spring = Spring::new(Vec3::ZERO, SpringConfig::WOBBLY);
        spring.set_target(Vec3::X * 10.0);
        spring.step(0.05);

        spring.jump_to(Vec3::Y);

        assert!(spring.is_resting());
        assert_eq!(spring.value(), Vec3::Y);
    }
}
