use crate::constants::ORBIT_PHASE_JITTER;
use rand::Rng;
use rand::distr::Uniform;

/// Random starting phase so that several orbiters never line up.
pub fn random_phase_offset() -> f32 {
    let mut rng = rand::rng();
    match Uniform::new(0.0f32, ORBIT_PHASE_JITTER) {
        Ok(range) => rng.sample(range),
        Err(_) => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_offset_stays_in_jitter_range() {
        for _ in 0..100 {
            let offset = random_phase_offset();
            assert!((0.0..ORBIT_PHASE_JITTER).contains(&offset));
        }
    }
}
