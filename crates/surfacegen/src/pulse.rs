use crate::constants::{PULSE_DELAY_MS, PULSE_STEP_MS};
use crate::timeline::Timeline;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulsePhase {
    Idle,
    PulseOn1,
    PulseOff1,
    PulseOn2,
    PulseOff2,
    Done,
}

impl PulsePhase {
    pub fn is_emphasized(self) -> bool {
        matches!(self, PulsePhase::PulseOn1 | PulsePhase::PulseOn2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseTiming {
    /// Time from creation to the first pulse
    pub delay_ms: u64,
    /// Time between consecutive phase changes
    pub step_ms: u64,
}

impl Default for PulseTiming {
    fn default() -> Self {
        Self {
            delay_ms: PULSE_DELAY_MS,
            step_ms: PULSE_STEP_MS,
        }
    }
}

/// Fire-once double pulse: idle, on, off, on, off, done.
#[derive(Debug, Clone, PartialEq)]
pub struct PulseSequence {
    phase: PulsePhase,
    timeline: Timeline<PulsePhase>,
}

impl PulseSequence {
    pub fn new(created_at_ms: u64, timing: PulseTiming) -> Self {
        let start = created_at_ms + timing.delay_ms;
        let mut timeline = Timeline::new();
        for (step, phase) in [
            PulsePhase::PulseOn1,
            PulsePhase::PulseOff1,
            PulsePhase::PulseOn2,
            PulsePhase::PulseOff2,
            PulsePhase::Done,
        ]
        .into_iter()
        .enumerate()
        {
            timeline.schedule(start + step as u64 * timing.step_ms, phase);
        }

        Self {
            phase: PulsePhase::Idle,
            timeline,
        }
    }

    /// Apply every transition due by `now_ms` and report the emphasis flag
    pub fn advance(&mut self, now_ms: u64) -> bool {
        for phase in self.timeline.drain_due(now_ms) {
            self.phase = phase;
        }
        self.phase.is_emphasized()
    }

    pub fn phase(&self) -> PulsePhase {
        self.phase
    }

    pub fn is_emphasized(&self) -> bool {
        self.phase.is_emphasized()
    }

    pub fn is_finished(&self) -> bool {
        self.phase == PulsePhase::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, false, PulsePhase::Idle)]
    #[case(9_999, false, PulsePhase::Idle)]
    #[case(10_000, true, PulsePhase::PulseOn1)]
    #[case(10_250, false, PulsePhase::PulseOff1)]
    #[case(10_500, true, PulsePhase::PulseOn2)]
    #[case(10_750, false, PulsePhase::PulseOff2)]
    #[case(11_000, false, PulsePhase::Done)]
    #[case(60_000, false, PulsePhase::Done)]
    fn follows_double_pulse_schedule(
        #[case] now_ms: u64,
        #[case] emphasized: bool,
        #[case] phase: PulsePhase,
    ) {
        let mut pulse = PulseSequence::new(0, PulseTiming::default());

        assert_eq!(pulse.advance(now_ms), emphasized);
        assert_eq!(pulse.phase(), phase);
    }

    #[test]
    fn stepping_through_each_instant_visits_every_phase() {
        let mut pulse = PulseSequence::new(0, PulseTiming::default());
        let mut flags = Vec::new();
        for now in [10_000, 10_250, 10_500, 10_750] {
            flags.push(pulse.advance(now));
        }

        assert_eq!(flags, vec![true, false, true, false]);
        for now in (10_751..20_000).step_by(37) {
            assert!(!pulse.advance(now));
        }
        assert!(pulse.is_finished());
    }

    #[test]
    fn schedule_is_relative_to_creation() {
        let mut pulse = PulseSequence::new(2_000, PulseTiming::default());

        assert!(!pulse.advance(10_000));
        assert!(pulse.advance(12_000));
    }
}
