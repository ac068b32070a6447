//! Uniform random sources driving field initialization and proposals
//!
//! The core algorithm only needs a zero-argument source of values in
//! `[0, 1)`. Any `FnMut() -> f64` closure qualifies, which makes scripted
//! sequences trivial in tests; [`RandomSource`] is the seeded default used
//! by the command-line adapter.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniformly distributed values in `[0, 1)`
pub trait UniformSource {
    /// Draw the next value
    fn next_unit(&mut self) -> f64;

    /// Draw an index uniformly from `0..len`
    ///
    /// Values at or above 1.0 from a misbehaving source are clamped onto the
    /// last index. Returns 0 when `len` is 0.
    fn next_index(&mut self, len: usize) -> usize {
        let scaled = (self.next_unit() * len as f64) as usize;
        scaled.min(len.saturating_sub(1))
    }
}

impl<F> UniformSource for F
where
    F: FnMut() -> f64,
{
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Default source backed by the standard seedable generator
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Create a deterministic source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl UniformSource for RandomSource {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}
