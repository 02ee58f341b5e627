//! Cubic spline interpolation with not-a-knot end conditions.
//!
//! In more than one dimension the spline is applied as a tensor product:
//! the field is resampled along axis 0, then axis 1, and so on, each pass
//! fitting a 1-D spline to every line of the intermediate field.

use smodel_spec::InterpolationKernel;

use super::{locate, GridInterpolator};
use crate::error::{FieldResult, GenerateError};
use crate::field::Field;
use crate::grid::CoordinateSet;

pub(crate) struct CubicInterpolator;

/// Interpolating cubic spline over uniformly spaced nodes on `[0, 1]`.
///
/// The third derivative is continuous across the second and second-to-last
/// nodes ("not-a-knot"), so four nodes yield the single cubic through them
/// and cubic polynomials are reproduced exactly.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    values: Vec<f64>,
    /// Second derivative at each node.
    curvature: Vec<f64>,
}

impl CubicSpline {
    /// Fit a spline through `values`, taken at `linspace(0, 1, values.len())`.
    ///
    /// Returns `None` for fewer than four nodes.
    pub fn fit(values: &[f64]) -> Option<Self> {
        let m = values.len();
        if m < 4 {
            return None;
        }
        let h = 1.0 / (m - 1) as f64;
        let scale = 6.0 / (h * h);

        // Unknowns are the interior curvatures M[1..m-1]. Substituting the
        // not-a-knot conditions M[0] = 2M[1] - M[2] and
        // M[m-1] = 2M[m-2] - M[m-3] turns the first and last rows into 6M = d.
        let k = m - 2;
        let rhs: Vec<f64> = (1..m - 1)
            .map(|i| scale * (values[i - 1] - 2.0 * values[i] + values[i + 1]))
            .collect();
        let mut lower = vec![1.0; k];
        let mut diag = vec![4.0; k];
        let mut upper = vec![1.0; k];
        diag[0] = 6.0;
        upper[0] = 0.0;
        diag[k - 1] = 6.0;
        lower[k - 1] = 0.0;

        let interior = solve_tridiagonal(&lower, &diag, &upper, rhs);

        let mut curvature = Vec::with_capacity(m);
        curvature.push(2.0 * interior[0] - interior[1]);
        curvature.extend_from_slice(&interior);
        curvature.push(2.0 * interior[k - 1] - interior[k - 2]);

        Some(Self {
            values: values.to_vec(),
            curvature,
        })
    }

    /// Evaluate at `x`; NaN outside `[0, 1]`.
    pub fn eval(&self, x: f64) -> f64 {
        match locate(self.values.len(), x) {
            Some((cell, frac)) => self.eval_in_cell(cell, frac),
            None => f64::NAN,
        }
    }

    fn eval_in_cell(&self, cell: usize, frac: f64) -> f64 {
        let h = 1.0 / (self.values.len() - 1) as f64;
        let a = 1.0 - frac;
        let b = frac;
        a * self.values[cell]
            + b * self.values[cell + 1]
            + ((a * a * a - a) * self.curvature[cell] + (b * b * b - b) * self.curvature[cell + 1])
                * (h * h)
                / 6.0
    }
}

/// Thomas algorithm. `lower[0]` and `upper[n-1]` are ignored.
fn solve_tridiagonal(lower: &[f64], diag: &[f64], upper: &[f64], mut rhs: Vec<f64>) -> Vec<f64> {
    let n = diag.len();
    let mut c_prime = vec![0.0; n];
    c_prime[0] = upper[0] / diag[0];
    rhs[0] /= diag[0];
    for i in 1..n {
        let denom = diag[i] - lower[i] * c_prime[i - 1];
        c_prime[i] = upper[i] / denom;
        rhs[i] = (rhs[i] - lower[i] * rhs[i - 1]) / denom;
    }
    for i in (0..n - 1).rev() {
        rhs[i] -= c_prime[i] * rhs[i + 1];
    }
    rhs
}

impl GridInterpolator for CubicInterpolator {
    fn resample(&self, source: &Field, targets: &CoordinateSet) -> FieldResult<Field> {
        let mut current = source.clone();

        for (axis, coords) in targets.axes().iter().enumerate() {
            let extent = current.shape()[axis];
            let stride = current.strides()[axis];
            let outer: usize = current.shape()[..axis].iter().product();
            let located: Vec<Option<(usize, f64)>> =
                coords.iter().map(|&x| locate(extent, x)).collect();

            let mut shape = current.shape().to_vec();
            shape[axis] = coords.len();
            let mut next = Field::new(shape, 0.0);

            let mut line = vec![0.0; extent];
            for o in 0..outer {
                for inner in 0..stride {
                    let src_base = o * extent * stride + inner;
                    for (k, slot) in line.iter_mut().enumerate() {
                        *slot = current.data()[src_base + k * stride];
                    }
                    let spline =
                        CubicSpline::fit(&line).ok_or(GenerateError::TooFewPoints {
                            kernel: InterpolationKernel::Cubic,
                            required: InterpolationKernel::Cubic.min_points(),
                            points: extent,
                        })?;

                    let dst_base = o * coords.len() * stride + inner;
                    let out = next.data_mut();
                    for (k, loc) in located.iter().enumerate() {
                        out[dst_base + k * stride] = match *loc {
                            Some((cell, frac)) => spline.eval_in_cell(cell, frac),
                            None => f64::NAN,
                        };
                    }
                }
            }
            current = next;
        }

        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cubic(x: f64) -> f64 {
        2.0 * x * x * x - x * x + 0.5 * x - 3.0
    }

    #[test]
    fn test_fit_requires_four_nodes() {
        assert!(CubicSpline::fit(&[0.0, 1.0, 2.0]).is_none());
        assert!(CubicSpline::fit(&[0.0, 1.0, 2.0, 3.0]).is_some());
    }

    #[test]
    fn test_short_axis_is_an_error_not_zeros() {
        let source = Field::new(vec![8, 3], 1.0);
        let err = CubicInterpolator
            .resample(&source, &CoordinateSet::cube(16, 2))
            .unwrap_err();
        assert!(matches!(
            err,
            GenerateError::TooFewPoints {
                kernel: InterpolationKernel::Cubic,
                required: 4,
                points: 3,
            }
        ));
    }

    #[test]
    fn test_interpolates_nodes() {
        let values = [0.3, -1.2, 0.8, 2.5, -0.4, 1.1];
        let spline = CubicSpline::fit(&values).unwrap();
        for (i, &v) in values.iter().enumerate() {
            let x = i as f64 / (values.len() - 1) as f64;
            assert!((spline.eval(x) - v).abs() < 1e-12);
        }
    }

    #[test]
    fn test_reproduces_cubic_polynomial() {
        for m in [4, 5, 9, 32] {
            let values: Vec<f64> = crate::grid::linspace(m).into_iter().map(cubic).collect();
            let spline = CubicSpline::fit(&values).unwrap();
            for j in 0..=50 {
                let x = j as f64 / 50.0;
                assert!(
                    (spline.eval(x) - cubic(x)).abs() < 1e-9,
                    "m = {}, x = {}: {} vs {}",
                    m,
                    x,
                    spline.eval(x),
                    cubic(x)
                );
            }
        }
    }

    #[test]
    fn test_outside_domain_is_nan() {
        let spline = CubicSpline::fit(&[0.0, 1.0, 0.0, 1.0]).unwrap();
        assert!(spline.eval(-0.5).is_nan());
        assert!(spline.eval(1.5).is_nan());
    }

    #[test]
    fn test_tensor_product_reproduces_separable_cubic() {
        let shape = [5, 6];
        let source_coords = CoordinateSet::for_shape(&shape);
        let data = source_coords
            .points()
            .map(|p| cubic(p[0]) * (1.0 - p[1] * p[1]))
            .collect();
        let source = Field::from_vec(shape.to_vec(), data).unwrap();

        let targets = CoordinateSet::cube(11, 2);
        let out = CubicInterpolator.resample(&source, &targets).unwrap();
        assert_eq!(out.shape(), &[11, 11]);
        for (value, p) in out.data().iter().zip(targets.points()) {
            let expected = cubic(p[0]) * (1.0 - p[1] * p[1]);
            assert!((value - expected).abs() < 1e-9);
        }
    }
}
