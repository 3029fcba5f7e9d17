// ABOUTME: Randomness source abstraction for dice rolls.
// ABOUTME: Allows injecting deterministic sequences in tests.

/// Trait for random number generation, allowing for testing with fixed values.
pub trait Rng {
    /// Generate a random number in the range [1, max].
    fn roll(&mut self, max: u32) -> u32;
}

/// Default RNG using fastrand.
pub struct FastRng(fastrand::Rng);

impl FastRng {
    pub fn new() -> Self {
        Self(fastrand::Rng::new())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self(fastrand::Rng::with_seed(seed))
    }
}

impl Default for FastRng {
    fn default() -> Self {
        Self::new()
    }
}

impl Rng for FastRng {
    fn roll(&mut self, max: u32) -> u32 {
        self.0.u32(1..=max)
    }
}

/// A scripted RNG yielding a fixed sequence, for deterministic tests.
#[cfg(test)]
pub(crate) struct SeqRng {
    values: Vec<u32>,
    index: usize,
}

#[cfg(test)]
impl SeqRng {
    pub(crate) fn new(values: Vec<u32>) -> Self {
        Self { values, index: 0 }
    }
}

#[cfg(test)]
impl Rng for SeqRng {
    fn roll(&mut self, _max: u32) -> u32 {
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_rng_stays_in_range() {
        let mut rng = FastRng::with_seed(7);
        for _ in 0..1000 {
            let v = rng.roll(6);
            assert!((1..=6).contains(&v));
        }
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = FastRng::with_seed(42);
        let mut b = FastRng::with_seed(42);
        let first: Vec<u32> = (0..20).map(|_| a.roll(20)).collect();
        let second: Vec<u32> = (0..20).map(|_| b.roll(20)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn every_face_appears_over_many_trials() {
        let mut rng = FastRng::with_seed(1);
        let mut seen = [false; 6];
        for _ in 0..600 {
            seen[(rng.roll(6) - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
