//! Zero-mean random seed fields.

use rand_distr::Normal;
use smodel_spec::{Distribution, ParamError};

use crate::error::FieldResult;
use crate::field::Field;
use crate::rng::DeterministicRng;

/// Draw a random field of the given shape and subtract its sample mean.
///
/// - `Uniform`: elements are independent draws on `[0, 1)`.
/// - `Normal`: elements are independent draws from `N(0, 1/sqrt(max(shape)))`,
///   so the spread narrows as the sampled grid grows.
///
/// Elements are drawn in row-major order.
pub fn random_field(
    shape: &[usize],
    distribution: Distribution,
    rng: &mut DeterministicRng,
) -> FieldResult<Field> {
    let size: usize = shape.iter().product();
    let data: Vec<f64> = match distribution {
        Distribution::Uniform => (0..size).map(|_| rng.gen_f64()).collect(),
        Distribution::Normal => {
            let widest = shape.iter().copied().max().unwrap_or(1).max(1);
            let sigma = 1.0 / (widest as f64).sqrt();
            let normal = Normal::new(0.0, sigma)
                .map_err(|e| ParamError::invalid_param("distribution", e.to_string()))?;
            (0..size).map(|_| rng.sample(&normal)).collect()
        }
    };

    let mut field = Field::from_vec(shape.to_vec(), data)?;
    field.center();
    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_mean_for_both_distributions() {
        let shapes: [&[usize]; 3] = [&[8], &[8, 8], &[16, 16, 16]];
        for distribution in Distribution::ALL {
            for shape in shapes {
                let mut rng = DeterministicRng::new(42);
                let field = random_field(shape, distribution, &mut rng).unwrap();
                assert_eq!(field.shape(), shape);
                assert!(
                    field.mean().abs() < 1e-12,
                    "{} mean {} for shape {:?}",
                    distribution,
                    field.mean(),
                    shape
                );
            }
        }
    }

    #[test]
    fn test_uniform_range_after_centering() {
        let mut rng = DeterministicRng::new(1);
        let field = random_field(&[256], Distribution::Uniform, &mut rng).unwrap();
        assert!(field.min() >= -1.0 && field.max() < 1.0);
        // Uniform on [0, 1) has std 1/sqrt(12) ~ 0.289.
        assert!((field.std() - 0.289).abs() < 0.05, "std = {}", field.std());
    }

    #[test]
    fn test_normal_spread_narrows_with_size() {
        let mut rng = DeterministicRng::new(3);
        let field = random_field(&[1024], Distribution::Normal, &mut rng).unwrap();
        // sigma = 1/sqrt(1024) = 1/32
        assert!((field.std() - 1.0 / 32.0).abs() < 0.005, "std = {}", field.std());
    }

    #[test]
    fn test_deterministic_for_seed() {
        let a = random_field(&[4, 4], Distribution::Normal, &mut DeterministicRng::new(5)).unwrap();
        let b = random_field(&[4, 4], Distribution::Normal, &mut DeterministicRng::new(5)).unwrap();
        assert_eq!(a, b);
    }
}
