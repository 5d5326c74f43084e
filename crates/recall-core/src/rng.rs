/// Deterministic RNG helpers.
///
/// Every random decision in the simulation (fallback actions, weighted plan
/// draws, respawn delays) goes through this trait so a seed fully determines
/// a run. It is **not** cryptographic.

pub trait DeterministicRng {
    fn next_u64(&mut self) -> u64;

    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Uniform value in `[0, 1)` with 53 bits of precision.
    fn next_f64_unit(&mut self) -> f64 {
        let x = self.next_u64() >> 11;
        (x as f64) / ((1u64 << 53) as f64)
    }

    /// Uniform integer in `[0, bound)`. `bound` must be non-zero.
    fn next_below(&mut self, bound: u32) -> u32 {
        assert!(bound > 0, "next_below bound must be > 0");
        // Lemire's multiply-shift; the bias is negligible for the small bounds used here.
        ((u64::from(self.next_u32()) * u64::from(bound)) >> 32) as u32
    }

    fn next_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

/// SplitMix64: good seeding RNG and small deterministic generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl DeterministicRng for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        mix64(self.state)
    }
}

/// Weyl increment shared by the generator and [`derive_seed`].
const GOLDEN_GAMMA: u64 = 0x9E3779B97F4A7C15;

pub fn mix64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}

/// Derive an independent seed for one consumer (`stream`) of a global seed.
pub fn derive_seed(global_seed: u64, stream: u64) -> u64 {
    mix64(global_seed ^ mix64(stream.wrapping_add(GOLDEN_GAMMA)))
}

/// Stream ids used with [`derive_seed`].
pub mod streams {
    pub const ENGINE: u64 = 1;
    pub const WORLD: u64 = 2;
}
