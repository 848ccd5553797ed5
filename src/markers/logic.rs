use bevy::color::Color;
use bevy::math::{EulerRot, Quat, Vec2, Vec3};
use surfacegen::config::OrbitConfig;
use surfacegen::spring::SpringConfig;

pub const ACTIVE_COLOR: Color = Color::srgb(1.0, 0.42, 0.42);
pub const HOVER_COLOR: Color = Color::srgb(0.302, 0.671, 0.969);
pub const IDLE_COLOR: Color = Color::srgb(0.133, 0.545, 0.902);

const PULSE_SCALE: f32 = 1.3;
const HOVER_SCALE: f32 = 1.1;

/// Compact glyph shown instead of the label while a marker is idle
pub fn marker_icon(label: &str) -> &str {
    match label {
        "About" => "ℹ️",
        "Skills" => "🔧",
        "Experience" => "💼",
        other => other,
    }
}

pub fn display_label(label: &str, hovered: bool, pulsing: bool, orbiting: bool, narrow: bool) -> &str {
    if hovered || pulsing || (!orbiting && narrow) {
        label
    } else {
        marker_icon(label)
    }
}

pub fn marker_color(active: bool, hovered: bool) -> Color {
    if active {
        ACTIVE_COLOR
    } else if hovered {
        HOVER_COLOR
    } else {
        IDLE_COLOR
    }
}

/// Uniform scale the marker springs towards, and the spring that gets it there
pub fn scale_target(pulsing: bool, hovered: bool, orbit: &OrbitConfig) -> (f32, SpringConfig) {
    if pulsing {
        (PULSE_SCALE, orbit.pulse_spring)
    } else if hovered {
        (HOVER_SCALE, orbit.hover_spring)
    } else {
        (1.0, orbit.hover_spring)
    }
}

/// Per-tick tumble about X and Y. Holds while shuddering, resets while paused.
pub fn advance_spin(spin: Vec2, orbiting: bool, shuddering: bool, step: f32) -> Vec2 {
    if !orbiting {
        Vec2::ZERO
    } else if shuddering {
        spin
    } else {
        spin + Vec2::splat(step)
    }
}

pub fn marker_rotation(spin: Vec2, tilt: Vec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, spin.x + tilt.x, spin.y + tilt.y, tilt.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("About", false, false, true, false, "ℹ️")]
    #[case("Skills", false, false, true, false, "🔧")]
    #[case("Experience", false, false, true, false, "💼")]
    #[case("Contact", false, false, true, false, "Contact")]
    #[case("About", true, false, true, false, "About")]
    #[case("Skills", false, true, true, false, "Skills")]
    #[case("Experience", false, false, false, true, "Experience")]
    #[case("Experience", false, false, false, false, "💼")]
    #[case("Experience", false, false, true, true, "💼")]
    fn picks_label_or_icon(
        #[case] label: &str,
        #[case] hovered: bool,
        #[case] pulsing: bool,
        #[case] orbiting: bool,
        #[case] narrow: bool,
        #[case] expected: &str,
    ) {
        assert_eq!(display_label(label, hovered, pulsing, orbiting, narrow), expected);
    }

    #[rstest]
    #[case(true, true, ACTIVE_COLOR)]
    #[case(true, false, ACTIVE_COLOR)]
    #[case(false, true, HOVER_COLOR)]
    #[case(false, false, IDLE_COLOR)]
    fn active_beats_hover(#[case] active: bool, #[case] hovered: bool, #[case] expected: Color) {
        assert_eq!(marker_color(active, hovered), expected);
    }

    fn bytes(color: Color) -> [u8; 3] {
        let c = color.to_srgba();
        [c.red, c.green, c.blue].map(|v| (v * 255.0).round() as u8)
    }

    #[test]
    fn colors_match_palette() {
        assert_eq!(bytes(ACTIVE_COLOR), [0xff, 0x6b, 0x6b]);
        assert_eq!(bytes(HOVER_COLOR), [0x4d, 0xab, 0xf7]);
        assert_eq!(bytes(IDLE_COLOR), [0x22, 0x8b, 0xe6]);
    }

    #[rstest]
    #[case(true, true, 1.3)]
    #[case(true, false, 1.3)]
    #[case(false, true, 1.1)]
    #[case(false, false, 1.0)]
    fn pulse_beats_hover_for_scale(#[case] pulsing: bool, #[case] hovered: bool, #[case] expected: f32) {
        let orbit = OrbitConfig::default();

        let (scale, spring) = scale_target(pulsing, hovered, &orbit);

        assert_eq!(scale, expected);
        if pulsing {
            assert_eq!(spring, orbit.pulse_spring);
        } else {
            assert_eq!(spring, SpringConfig::WOBBLY);
        }
    }

    #[test]
    fn spin_accumulates_holds_and_resets() {
        let mut spin = Vec2::ZERO;
        for _ in 0..10 {
            spin = advance_spin(spin, true, false, 0.01);
        }
        assert!((spin - Vec2::splat(0.1)).length() < 1e-6);

        let held = advance_spin(spin, true, true, 0.01);
        assert_eq!(held, spin);

        assert_eq!(advance_spin(spin, false, false, 0.01), Vec2::ZERO);
    }

    #[test]
    fn zero_spin_and_tilt_is_identity() {
        assert_eq!(marker_rotation(Vec2::ZERO, Vec3::ZERO), Quat::IDENTITY);
    }
}
