use bevy::math::{Vec2, Vec3};
use std::f32::consts::PI;
use surfacegen::config::CameraConfig;
use surfacegen::spring::Spring;

/// Keeps the camera off the poles where the up vector degenerates
const POLAR_EPSILON: f32 = 1e-4;

/// Spring carrying the camera from the intro start to the explore position
pub fn intro_spring(config: &CameraConfig) -> Spring {
    let mut spring = Spring::new(Vec3::from_array(config.intro_start), config.intro_spring);
    spring.set_target(Vec3::from_array(config.intro_end));
    spring
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLimits {
    pub min_distance: f32,
    pub max_distance: f32,
    pub damping: f32,
    pub rotate_speed: f32,
    pub pan_speed: f32,
    pub zoom_speed: f32,
}

impl From<&CameraConfig> for OrbitLimits {
    fn from(config: &CameraConfig) -> Self {
        Self {
            min_distance: config.min_distance,
            max_distance: config.max_distance,
            damping: config.damping,
            rotate_speed: config.rotate_speed,
            pan_speed: config.pan_speed,
            zoom_speed: config.zoom_speed,
        }
    }
}

/// Spherical camera placement around a focus point.
///
/// `azimuth` is measured around +Y from +Z, `polar` down from +Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitRig {
    pub focus: Vec3,
    pub distance: f32,
    pub azimuth: f32,
    pub polar: f32,
    /// Rotation still to be applied, eased out by damping
    pub rotate_velocity: Vec2,
    pub pan_velocity: Vec3,
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self {
            focus: Vec3::ZERO,
            distance: 10.0,
            azimuth: 0.0,
            polar: PI / 2.0,
            rotate_velocity: Vec2::ZERO,
            pan_velocity: Vec3::ZERO,
        }
    }
}

impl OrbitRig {
    pub fn from_position(position: Vec3, focus: Vec3) -> Self {
        let offset = position - focus;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return Self {
                focus,
                ..Default::default()
            };
        }

        Self {
            focus,
            distance,
            azimuth: offset.x.atan2(offset.z),
            polar: (offset.y / distance).clamp(-1.0, 1.0).acos(),
            rotate_velocity: Vec2::ZERO,
            pan_velocity: Vec3::ZERO,
        }
    }

    pub fn position(&self) -> Vec3 {
        let sin_polar = self.polar.sin();
        let direction = Vec3::new(
            sin_polar * self.azimuth.sin(),
            self.polar.cos(),
            sin_polar * self.azimuth.cos(),
        );
        self.focus + direction * self.distance
    }

    /// Camera right and up vectors in world space
    fn screen_axes(&self) -> (Vec3, Vec3) {
        let back = (self.position() - self.focus).normalize_or(Vec3::Z);
        let right = Vec3::Y.cross(back).normalize_or(Vec3::X);
        let up = back.cross(right);
        (right, up)
    }
}

pub struct OrbitInput {
    pub rotate_pressed: bool,
    pub pan_pressed: bool,
    pub mouse_delta: Vec2,
    pub wheel_delta: f32,
}

/// Feed one frame of input into the rig and advance its damped motion
pub fn calculate_orbit_update(rig: &OrbitRig, input: &OrbitInput, limits: &OrbitLimits) -> OrbitRig {
    let mut rig = *rig;

    if input.rotate_pressed {
        rig.rotate_velocity -= input.mouse_delta * limits.rotate_speed;
    }
    if input.pan_pressed {
        let (right, up) = rig.screen_axes();
        rig.pan_velocity +=
            (-right * input.mouse_delta.x + up * input.mouse_delta.y) * limits.pan_speed;
    }

    let damping = if limits.damping > 0.0 {
        limits.damping.min(1.0)
    } else {
        1.0
    };

    let rotation = rig.rotate_velocity * damping;
    rig.azimuth += rotation.x;
    rig.polar = (rig.polar + rotation.y).clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
    rig.rotate_velocity -= rotation;

    let pan = rig.pan_velocity * damping;
    rig.focus += pan;
    rig.pan_velocity -= pan;

    rig.distance = (rig.distance - input.wheel_delta * limits.zoom_speed)
        .clamp(limits.min_distance, limits.max_distance);

    rig
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn limits() -> OrbitLimits {
        OrbitLimits::from(&CameraConfig::default())
    }

    fn no_input() -> OrbitInput {
        OrbitInput {
            rotate_pressed: false,
            pan_pressed: false,
            mouse_delta: Vec2::ZERO,
            wheel_delta: 0.0,
        }
    }

    #[rstest]
    #[case(Vec3::new(0.0, -2.0, 10.0))]
    #[case(Vec3::new(5.0, 3.0, -4.0))]
    #[case(Vec3::new(-8.0, 0.0, 0.5))]
    fn rig_reproduces_its_source_position(#[case] position: Vec3) {
        let rig = OrbitRig::from_position(position, Vec3::ZERO);

        let distance = (rig.position() - position).length();
        assert!(distance < 1e-4, "rig drifted by {}", distance);
    }

    #[test]
    fn no_input_no_change() {
        let rig = OrbitRig::from_position(Vec3::new(0.0, -2.0, 10.0), Vec3::ZERO);

        let result = calculate_orbit_update(&rig, &no_input(), &limits());

        assert_eq!(result, rig);
    }

    #[rstest]
    #[case(100.0, 2.0)]
    #[case(-100.0, 30.0)]
    #[case(1.0, 9.5)]
    fn wheel_zoom_is_clamped(#[case] wheel: f32, #[case] expected: f32) {
        let rig = OrbitRig {
            distance: 10.0,
            ..Default::default()
        };
        let mut input = no_input();
        input.wheel_delta = wheel;

        let result = calculate_orbit_update(&rig, &input, &limits());

        assert!((result.distance - expected).abs() < 1e-5);
    }

    #[rstest]
    #[case(5_000.0)]
    #[case(-5_000.0)]
    fn polar_angle_stays_within_half_turn(#[case] drag: f32) {
        let mut rig = OrbitRig::default();
        let mut input = no_input();
        input.rotate_pressed = true;
        input.mouse_delta = Vec2::new(0.0, drag);

        for _ in 0..200 {
            rig = calculate_orbit_update(&rig, &input, &limits());
            assert!((0.0..=PI).contains(&rig.polar));
        }
    }

    #[test]
    fn damping_eases_rotation_in() {
        let rig = OrbitRig::default();
        let mut input = no_input();
        input.rotate_pressed = true;
        input.mouse_delta = Vec2::new(-100.0, 0.0);

        let first = calculate_orbit_update(&rig, &input, &limits());
        // 100 px * 0.005 rad/px, 5% applied on the first frame
        assert!((first.azimuth - 0.025).abs() < 1e-5);

        let mut settled = first;
        for _ in 0..400 {
            settled = calculate_orbit_update(&settled, &no_input(), &limits());
        }
        assert!((settled.azimuth - 0.5).abs() < 1e-3);
    }

    #[test]
    fn pan_moves_focus_sideways() {
        let rig = OrbitRig::from_position(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let mut input = no_input();
        input.pan_pressed = true;
        input.mouse_delta = Vec2::new(50.0, 0.0);

        let mut result = calculate_orbit_update(&rig, &input, &limits());
        for _ in 0..400 {
            result = calculate_orbit_update(&result, &no_input(), &limits());
        }

        assert!((result.focus.x + 0.5).abs() < 1e-3);
        assert!(result.focus.y.abs() < 1e-4);
    }

    #[test]
    fn intro_spring_lands_on_explore_position() {
        let config = CameraConfig::default();
        let mut spring = intro_spring(&config);

        let mut rested = false;
        for _ in 0..(60 * 60) {
            if spring.step(1.0 / 60.0) {
                rested = true;
                break;
            }
        }

        assert!(rested);
        assert_eq!(spring.value(), Vec3::new(0.0, -2.0, 10.0));
    }
}
