//! Seeded randomness for decorative picks.
//!
//! Backdrops must look random yet render the same page for the same seed, so
//! everything draws from a SplitMix64 stream rather than an OS source.

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecorRng {
    state: u64,
}

impl DecorRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn mix(mut z: u64) -> u64 {
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn next_bits(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        Self::mix(self.state)
    }

    /// Uniform in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        (self.next_bits() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in `0..bound`. A zero bound yields 0.
    pub fn below(&mut self, bound: usize) -> usize {
        ((self.unit() * bound as f64) as usize).min(bound.saturating_sub(1))
    }

    /// Picks `min..=max` distinct indices from `0..pool`, in draw order.
    /// Repeats are redrawn; the count is capped at `pool`.
    pub fn scatter(&mut self, min: usize, max: usize, pool: usize) -> Vec<usize> {
        let count = (min + self.below(max.saturating_sub(min) + 1)).min(pool);
        let mut picked = Vec::with_capacity(count);
        while picked.len() < count {
            let index = self.below(pool);
            if !picked.contains(&index) {
                picked.push(index);
            }
        }
        picked
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/rng.rs"]
mod tests;
