use glam::Vec3;

/// Fixed per-orbiter parameters, set once at spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitParameters {
    pub radius: f32,
    pub angular_speed: f32,
    /// Starting phase, used to desynchronize orbiters
    pub phase_offset: f32,
}

impl OrbitParameters {
    pub fn new(radius: f32, angular_speed: f32, phase_offset: f32) -> Self {
        Self {
            radius,
            angular_speed,
            phase_offset,
        }
    }
}

/// Point on the horizontal orbit circle for a given accumulated phase
pub fn orbit_position(params: &OrbitParameters, phase: f32) -> Vec3 {
    let angle = phase * params.angular_speed;
    Vec3::new(angle.cos() * params.radius, 0.0, angle.sin() * params.radius)
}

/// Slot `index` of a row of `count` settled markers, centred on x = 0
pub fn settle_slot(index: usize, count: usize, spacing: f32, height: f32, depth: f32) -> Vec3 {
    let centre = count.saturating_sub(1) as f32 / 2.0;
    Vec3::new((index as f32 - centre) * spacing, height, depth)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    pub elapsed_phase: f32,
    pub current_position: Vec3,
    pub orbiting: bool,
}

impl OrbitState {
    /// Fresh orbiter: phase at its offset, resting at `(radius, 0, 0)`
    pub fn new(params: &OrbitParameters) -> Self {
        Self {
            elapsed_phase: params.phase_offset,
            current_position: Vec3::new(params.radius, 0.0, 0.0),
            orbiting: true,
        }
    }

    pub fn with_orbiting(self, orbiting: bool) -> Self {
        Self { orbiting, ..self }
    }

    /// One tick of orbital motion.
    ///
    /// While orbiting, the phase grows by `dt` and the position follows the
    /// circle. While paused, the phase is untouched and the position is held
    /// at `static_target`.
    pub fn advance(&self, params: &OrbitParameters, dt: f32, static_target: Vec3) -> Self {
        if !self.orbiting {
            return Self {
                current_position: static_target,
                ..*self
            };
        }

        let elapsed_phase = self.elapsed_phase + dt;
        Self {
            elapsed_phase,
            current_position: orbit_position(params, elapsed_phase),
            orbiting: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ORBIT_PHASE_STEP;
    use rstest::rstest;

    const HOLD: Vec3 = Vec3::new(-2.5, -2.0, 5.0);

    #[rstest]
    #[case(5.0, 0.5, 12.3)]
    #[case(4.0, 0.3, 0.0)]
    #[case(6.0, 0.7, 99.9)]
    #[case(1.0, -2.0, 3.0)]
    #[case(0.0, 1.0, 7.0)]
    fn stays_on_circle_in_horizontal_plane(
        #[case] radius: f32,
        #[case] speed: f32,
        #[case] offset: f32,
    ) {
        let params = OrbitParameters::new(radius, speed, offset);
        let mut state = OrbitState::new(&params);

        for _ in 0..2_000 {
            state = state.advance(&params, ORBIT_PHASE_STEP, HOLD);
            assert_eq!(state.current_position.y, 0.0);
            let distance = state.current_position.length();
            assert!(
                (distance - radius).abs() < 1e-4,
                "distance was {}, expected {}",
                distance,
                radius
            );
        }
    }

    #[test]
    fn zero_speed_is_motionless_at_radius() {
        let params = OrbitParameters::new(5.0, 0.0, 42.0);
        let mut state = OrbitState::new(&params);

        for _ in 0..100 {
            state = state.advance(&params, ORBIT_PHASE_STEP, HOLD);
            assert_eq!(state.current_position, Vec3::new(5.0, 0.0, 0.0));
        }
    }

    #[test]
    fn zero_radius_is_motionless_at_origin() {
        let params = OrbitParameters::new(0.0, 0.7, 3.0);
        let mut state = OrbitState::new(&params);

        for _ in 0..100 {
            state = state.advance(&params, ORBIT_PHASE_STEP, HOLD);
            assert_eq!(state.current_position, Vec3::ZERO);
        }
    }

    #[test]
    fn pause_freezes_phase_and_holds_target() {
        let params = OrbitParameters::new(5.0, 0.5, 1.0);
        let mut state = OrbitState::new(&params);
        for _ in 0..10 {
            state = state.advance(&params, ORBIT_PHASE_STEP, HOLD);
        }
        let phase_at_pause = state.elapsed_phase;

        state = state.with_orbiting(false);
        for _ in 0..50 {
            state = state.advance(&params, ORBIT_PHASE_STEP, HOLD);
            assert_eq!(state.elapsed_phase, phase_at_pause);
            assert_eq!(state.current_position, HOLD);
        }

        state = state.with_orbiting(true).advance(&params, ORBIT_PHASE_STEP, HOLD);
        assert_eq!(state.elapsed_phase, phase_at_pause + ORBIT_PHASE_STEP);
        assert_eq!(
            state.current_position,
            orbit_position(&params, phase_at_pause + ORBIT_PHASE_STEP)
        );
    }

    #[test]
    fn new_state_starts_at_radius_on_x() {
        let params = OrbitParameters::new(4.0, 0.3, 55.0);
        let state = OrbitState::new(&params);

        assert_eq!(state.current_position, Vec3::new(4.0, 0.0, 0.0));
        assert_eq!(state.elapsed_phase, 55.0);
        assert!(state.orbiting);
    }

    #[rstest]
    #[case(0, -2.5)]
    #[case(1, 0.0)]
    #[case(2, 2.5)]
    fn settle_row_is_centred(#[case] index: usize, #[case] expected_x: f32) {
        let slot = settle_slot(index, 3, 2.5, -2.0, 5.0);

        assert_eq!(slot, Vec3::new(expected_x, -2.0, 5.0));
    }
}
