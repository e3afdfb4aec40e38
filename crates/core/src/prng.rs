//! Deterministic Xorshift64 PRNG used for grid initialization.
//!
//! Only initial states are random; `step()` never draws from it. Seeding is
//! pure integer arithmetic, so the same seed fills the same grid on every
//! platform.

/// Xorshift64 PRNG with shifts (13, 7, 17).
///
/// A seed of 0 is replaced with a non-zero fallback, since zero is a fixed
/// point of the algorithm.
#[derive(Debug, Clone)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform f64 in [0, 1) from the upper 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform usize in [0, max), or `None` when the range is empty.
    ///
    /// Draws from the sequence either way.
    pub fn next_usize(&mut self, max: usize) -> Option<usize> {
        (self.next_u64() as usize).checked_rem(max)
    }

    /// Returns true with probability `p`. Values outside [0, 1] saturate.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}
