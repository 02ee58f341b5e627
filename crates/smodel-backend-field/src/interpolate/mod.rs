//! Grid interpolation kernels.
//!
//! A source [`Field`] is treated as samples on its own normalized grid (see
//! [`CoordinateSet::for_shape`]) and evaluated at the points of a target
//! [`CoordinateSet`]. The result is reshaped to the target grid.
//!
//! All three kernels cover the closed unit hypercube, so cascade upsampling
//! never produces NaN. Queries outside `[0, 1]` extrapolate under `Nearest`
//! and yield NaN under `Linear` and `Cubic`.

mod cubic;
mod linear;
mod nearest;

pub use cubic::CubicSpline;

use smodel_spec::InterpolationKernel;

use crate::error::{FieldResult, GenerateError};
use crate::field::Field;
use crate::grid::CoordinateSet;

/// Slack allowed when deciding whether a query lies inside `[0, 1]`.
const DOMAIN_EPSILON: f64 = 1e-9;

/// One interpolation scheme over a rectilinear source grid.
pub(crate) trait GridInterpolator {
    /// Evaluate `source` at every point of `targets`.
    ///
    /// Callers guarantee matching dimensionality and enough points per axis.
    fn resample(&self, source: &Field, targets: &CoordinateSet) -> FieldResult<Field>;
}

fn interpolator_for(kernel: InterpolationKernel) -> &'static dyn GridInterpolator {
    match kernel {
        InterpolationKernel::Nearest => &nearest::NearestInterpolator,
        InterpolationKernel::Linear => &linear::LinearInterpolator,
        InterpolationKernel::Cubic => &cubic::CubicInterpolator,
    }
}

/// Interpolate `source` onto `targets` with the given kernel.
///
/// # Errors
/// - [`GenerateError::ShapeMismatch`] if `targets` has a different number of
///   axes than `source`.
/// - [`GenerateError::TooFewPoints`] if some source axis is shorter than the
///   kernel needs (1 for nearest, 2 for linear, 4 for cubic).
///
/// # Example
/// ```
/// use smodel_backend_field::interpolate::resample;
/// use smodel_backend_field::{CoordinateSet, Field};
/// use smodel_spec::InterpolationKernel;
///
/// let coarse = Field::from_vec(vec![2], vec![0.0, 1.0]).unwrap();
/// let fine = resample(InterpolationKernel::Linear, &coarse, &CoordinateSet::cube(5, 1)).unwrap();
/// assert_eq!(fine.data(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn resample(
    kernel: InterpolationKernel,
    source: &Field,
    targets: &CoordinateSet,
) -> FieldResult<Field> {
    if source.ndim() != targets.ndim() {
        return Err(GenerateError::shape_mismatch(
            source.shape(),
            &targets.shape(),
        ));
    }

    let required = kernel.min_points();
    let smallest = source.shape().iter().copied().min().unwrap_or(0);
    if smallest < required {
        return Err(GenerateError::TooFewPoints {
            kernel,
            required,
            points: smallest,
        });
    }

    interpolator_for(kernel).resample(source, targets)
}

/// Position of `x` on an axis of `extent` uniformly spaced nodes over
/// `[0, 1]`, as a cell index and the fraction into that cell.
///
/// Returns `None` outside the axis. The cell index is clamped so that
/// `cell + 1` is always a valid node when `extent >= 2`.
fn locate(extent: usize, x: f64) -> Option<(usize, f64)> {
    if !(-DOMAIN_EPSILON..=1.0 + DOMAIN_EPSILON).contains(&x) {
        return None;
    }
    if extent < 2 {
        return Some((0, 0.0));
    }
    let last_cell = extent - 2;
    let t = (x * (extent - 1) as f64).clamp(0.0, (extent - 1) as f64);
    let cell = (t.floor() as usize).min(last_cell);
    Some((cell, t - cell as f64))
}

/// Visit every multi-index of `shape` in row-major order.
fn for_each_index(shape: &[usize], mut visit: impl FnMut(&[usize])) {
    if shape.iter().any(|&m| m == 0) {
        return;
    }
    let mut index = vec![0; shape.len()];
    loop {
        visit(&index);
        let mut axis = shape.len();
        loop {
            if axis == 0 {
                return;
            }
            axis -= 1;
            index[axis] += 1;
            if index[axis] < shape[axis] {
                break;
            }
            index[axis] = 0;
        }
    }
}
