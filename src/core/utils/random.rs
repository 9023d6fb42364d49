//! Injectable randomness for spin-direction decisions.
//!
//! The simulation only ever asks for a coin flip, but it asks through a trait
//! so tests can pin the outcome and replays stay bit-identical for a seed.

/// Source of uniform randomness consumed by collision responses.
pub trait RandomSource {
    /// Uniform value in [0, 1)
    fn next_f32(&mut self) -> f32;

    /// +1.0 or -1.0 with equal probability
    #[inline]
    fn next_sign(&mut self) -> f32 {
        if self.next_f32() < 0.5 { 1.0 } else { -1.0 }
    }

    /// Restart the sequence (called on every animation reset)
    fn reseed(&mut self, _seed: u32) {}
}

/// Random number generator (xorshift32)
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Deterministic xorshift32 generator. A zero seed is remapped since
/// xorshift never leaves the all-zero state.
#[derive(Clone, Debug)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub fn new(seed: u32) -> Self {
        Self { state: if seed == 0 { 0x9E37_79B9 } else { seed } }
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl RandomSource for XorShift32 {
    #[inline]
    fn next_f32(&mut self) -> f32 {
        // Top 24 bits -> exactly representable f32 in [0, 1)
        (xorshift32(&mut self.state) >> 8) as f32 / (1u32 << 24) as f32
    }

    fn reseed(&mut self, seed: u32) {
        *self = Self::new(seed);
    }
}

/// Always returns the same sign. Useful for pinning spin direction in tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedSign(pub f32);

impl RandomSource for FixedSign {
    fn next_f32(&mut self) -> f32 {
        if self.0 >= 0.0 { 0.0 } else { 0.75 }
    }
}
