//! Main entry point for cascade generation.
//!
//! [`SModel`] drives the octave loop: starting from a field of ones, every
//! octave `s = log2(n), ..., 2` blends the current field with a copy of
//! itself modulated by that octave's upsampled random field, and the result
//! is standardized to unit standard deviation.

#[cfg(test)]
mod tests;

use smodel_spec::validation::common as shared_validation;
use smodel_spec::CascadeParams;
use tracing::{debug, info, instrument};

use crate::error::{FieldResult, GenerateError};
use crate::field::Field;
use crate::rng::DeterministicRng;

/// Standard deviations at or below this fraction of the largest magnitude
/// are treated as zero.
const DEGENERATE_STD_RATIO: f64 = 1e-12;

/// Multiplicative-cascade field generator.
///
/// Parameters are fixed at construction; every call to [`SModel::generate`]
/// draws fresh randomness from the stream it is given.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SModel {
    params: CascadeParams,
}

impl SModel {
    /// Create a generator, validating its parameters.
    pub fn new(params: CascadeParams) -> FieldResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Create a generator from kernel and distribution names.
    ///
    /// An unknown kernel fails with
    /// [`ParamError::UnsupportedKernel`](smodel_spec::ParamError::UnsupportedKernel)
    /// rather than falling back to a default.
    pub fn from_names(
        cascade_probability: f64,
        kernel: &str,
        distribution: &str,
    ) -> FieldResult<Self> {
        Self::new(CascadeParams::from_names(
            cascade_probability,
            kernel,
            distribution,
        )?)
    }

    pub fn params(&self) -> &CascadeParams {
        &self.params
    }

    /// Generate a field of shape `(n,)*s_dim` with unit standard deviation.
    ///
    /// # Errors
    /// - [`GenerateError::InvalidResolution`] if `n` is not a positive power
    ///   of two or `s_dim` is out of range.
    /// - [`GenerateError::DegenerateOutput`] if the accumulated field is
    ///   constant, e.g. when `n < 4` leaves no octave to run.
    #[instrument(skip(self, rng), fields(kernel = %self.params.kernel, distribution = %self.params.distribution))]
    pub fn generate(
        &self,
        n: usize,
        s_dim: usize,
        rng: &mut DeterministicRng,
    ) -> FieldResult<Field> {
        shared_validation::validate_resolution(n, s_dim).map_err(|e| {
            GenerateError::InvalidResolution {
                n,
                s_dim,
                reason: e.message,
            }
        })?;

        let p = self.params.cascade_probability;
        let scales = octave_scales(n);
        info!(n, s_dim, octaves = scales.len(), p, "cascade starting");

        let mut output = Field::cube(n, s_dim, 1.0);
        for scale in scales {
            let modulation = self.scale_field(n, scale, s_dim, rng)?;
            debug!(scale, modulation_mean = modulation.mean(), "octave generated");
            output.zip_apply(&modulation, |o, m| p * o + (1.0 - p) * o * m)?;
        }

        let std = output.std();
        let magnitude = output.data().iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
        if !std.is_finite() || std <= DEGENERATE_STD_RATIO * magnitude.max(f64::MIN_POSITIVE) {
            return Err(GenerateError::DegenerateOutput { std });
        }
        output.map_inplace(|v| v / std);

        info!(std, "cascade complete");
        Ok(output)
    }

    /// Generate a field from a fresh stream seeded with `seed`.
    pub fn generate_seeded(&self, n: usize, s_dim: usize, seed: u32) -> FieldResult<Field> {
        let mut rng = DeterministicRng::new(seed);
        self.generate(n, s_dim, &mut rng)
    }

    /// Generate `count` independent realizations.
    ///
    /// Realization `i` uses the seed
    /// [`DeterministicRng::derive_realization_seed(base_seed, i)`](DeterministicRng::derive_realization_seed),
    /// so any single member can be regenerated alone.
    pub fn ensemble(
        &self,
        n: usize,
        s_dim: usize,
        base_seed: u32,
        count: u32,
    ) -> FieldResult<Vec<Field>> {
        (0..count)
            .map(|i| {
                let seed = DeterministicRng::derive_realization_seed(base_seed, i);
                self.generate_seeded(n, s_dim, seed)
            })
            .collect()
    }

    /// The upsampled modulation field of a single octave.
    pub fn scale_field(
        &self,
        n: usize,
        scale: usize,
        s_dim: usize,
        rng: &mut DeterministicRng,
    ) -> FieldResult<Field> {
        crate::scale::scale_field(&self.params, n, scale, s_dim, rng)
    }
}

/// Coarse resolutions visited by the cascade for output size `n`, in
/// processing order: `2^floor(log2 n)` down to `4`.
///
/// Empty when `n < 4`.
pub fn octave_scales(n: usize) -> Vec<usize> {
    if n < 4 {
        return Vec::new();
    }
    let top = n.ilog2();
    (2..=top).rev().map(|s| 1usize << s).collect()
}
