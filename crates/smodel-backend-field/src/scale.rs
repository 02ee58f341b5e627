//! Per-octave energy modulation fields.
//!
//! One octave draws a coarse zero-mean random grid at `scale` nodes per
//! axis, redistributes its energy between even and odd cells along every
//! axis, and upsamples the result to the output resolution.

use smodel_spec::{CascadeParams, Redistribution};

use crate::error::FieldResult;
use crate::field::Field;
use crate::grid::CoordinateSet;
use crate::interpolate::resample;
use crate::rng::DeterministicRng;
use crate::sample::random_field;

/// Weight every axis of `field`: even-indexed slices by `p`, odd-indexed
/// slices by `1 - p`.
///
/// One coin is flipped per axis. Under [`Redistribution::Fixed`] the flip is
/// ignored; under [`Redistribution::CoinFlip`] heads swaps the even and odd
/// weights for that axis.
pub fn redistribute(
    field: &mut Field,
    p: f64,
    mode: Redistribution,
    rng: &mut DeterministicRng,
) {
    for axis in 0..field.ndim() {
        let heads = rng.coin_flip();
        let (even, odd) = match (mode, heads) {
            (Redistribution::CoinFlip, true) => (1.0 - p, p),
            _ => (p, 1.0 - p),
        };
        field.scale_axis_parity(axis, even, odd);
    }
}

/// Generate the modulation field of one octave.
///
/// Draws a `(scale,)*s_dim` seed field, redistributes it, and interpolates
/// it onto the `(n,)*s_dim` output grid with the configured kernel.
pub fn scale_field(
    params: &CascadeParams,
    n: usize,
    scale: usize,
    s_dim: usize,
    rng: &mut DeterministicRng,
) -> FieldResult<Field> {
    let mut coarse = random_field(&vec![scale; s_dim], params.distribution, rng)?;
    redistribute(
        &mut coarse,
        params.cascade_probability,
        params.redistribution,
        rng,
    );

    let targets = CoordinateSet::cube(n, s_dim);
    resample(params.kernel, &coarse, &targets)
}
