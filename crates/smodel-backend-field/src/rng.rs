//! Deterministic RNG wrapper using PCG32.
//!
//! Every random draw made by the cascade goes through a [`DeterministicRng`]
//! passed in by the caller, so a fixed seed reproduces a field exactly and
//! concurrent generators never share state.

use rand::distributions::Distribution;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Wrapper around PCG32 for deterministic random number generation.
#[derive(Debug, Clone)]
pub struct DeterministicRng {
    inner: Pcg32,
}

impl DeterministicRng {
    /// Create a new RNG from a 32-bit seed.
    ///
    /// The seed is expanded to 64 bits by duplicating the bits.
    pub fn new(seed: u32) -> Self {
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            inner: Pcg32::seed_from_u64(seed64),
        }
    }

    /// Derive the seed of one realization in an ensemble using BLAKE3.
    pub fn derive_realization_seed(base_seed: u32, index: u32) -> u32 {
        let mut input = Vec::with_capacity(8);
        input.extend_from_slice(&base_seed.to_le_bytes());
        input.extend_from_slice(&index.to_le_bytes());
        let hash = blake3::hash(&input);
        let bytes = hash.as_bytes();
        u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    /// Generate a random f64 in the range [0.0, 1.0).
    #[inline]
    pub fn gen_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Flip a fair coin: a uniform draw compared against 0.5.
    #[inline]
    pub fn coin_flip(&mut self) -> bool {
        self.gen_f64() > 0.5
    }

    /// Draw one value from an arbitrary distribution.
    #[inline]
    pub fn sample<D: Distribution<f64>>(&mut self, dist: &D) -> f64 {
        self.inner.sample(dist)
    }
}
