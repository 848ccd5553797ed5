use glam::Vec3;

/// Euler offset applied while a shudder is active.
pub const SHUDDER_OFFSET: Vec3 = Vec3::splat(0.2);

/// Time-boxed orientation perturbation triggered by a click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shudder {
    duration_ms: u64,
    until_ms: Option<u64>,
}

impl Shudder {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            until_ms: None,
        }
    }

    /// Start (or restart) the shudder at `now_ms`
    pub fn trigger(&mut self, now_ms: u64) {
        self.until_ms = Some(now_ms + self.duration_ms);
    }

    pub fn is_active(&self, now_ms: u64) -> bool {
        self.until_ms.is_some_and(|until| now_ms < until)
    }

    /// Drop an expired shudder. Returns whether it is still active.
    pub fn update(&mut self, now_ms: u64) -> bool {
        if !self.is_active(now_ms) {
            self.until_ms = None;
        }
        self.until_ms.is_some()
    }

    /// Orientation offset the shudder is pulling towards
    pub fn target_offset(&self, now_ms: u64) -> Vec3 {
        if self.is_active(now_ms) {
            SHUDDER_OFFSET
        } else {
            Vec3::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SHUDDER_DURATION_MS;

    #[test]
    fn active_for_exact_duration() {
        let mut shudder = Shudder::new(SHUDDER_DURATION_MS);
        assert!(!shudder.is_active(0));

        shudder.trigger(1_000);

        assert!(shudder.is_active(1_000));
        assert!(shudder.is_active(1_149));
        assert!(!shudder.is_active(1_150));
        assert_eq!(shudder.target_offset(1_100), SHUDDER_OFFSET);
        assert_eq!(shudder.target_offset(1_150), Vec3::ZERO);
    }

    #[test]
    fn update_clears_expired_shudder() {
        let mut shudder = Shudder::new(150);
        shudder.trigger(0);

        assert!(shudder.update(100));
        assert!(!shudder.update(200));
        assert!(!shudder.is_active(120));
    }

    #[test]
    fn retrigger_extends_window() {
        let mut shudder = Shudder::new(150);
        shudder.trigger(0);
        shudder.trigger(100);

        assert!(shudder.is_active(200));
    }
}
