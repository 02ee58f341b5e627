//! Tests for cascade generation.

use super::*;
use smodel_spec::{BackendError, Distribution, InterpolationKernel, ParamError, Redistribution};

fn assert_unit_std(field: &Field) {
    let std = field.std();
    assert!((std - 1.0).abs() < 1e-9, "std = {}", std);
}

// ========================================================================
// Octave Schedule Tests
// ========================================================================

#[test]
fn test_octave_scales() {
    assert_eq!(octave_scales(2048), vec![2048, 1024, 512, 256, 128, 64, 32, 16, 8, 4]);
    assert_eq!(octave_scales(16), vec![16, 8, 4]);
    assert_eq!(octave_scales(4), vec![4]);
    assert!(octave_scales(2).is_empty());
    assert!(octave_scales(1).is_empty());
    assert!(octave_scales(0).is_empty());
}

#[test]
fn test_octave_scales_truncate_non_powers() {
    assert_eq!(octave_scales(100), vec![64, 32, 16, 8, 4]);
}

// ========================================================================
// Determinism Tests
// ========================================================================

#[test]
fn test_generate_deterministic() {
    let model = SModel::default();
    let a = model.generate_seeded(64, 1, 42).unwrap();
    let b = model.generate_seeded(64, 1, 42).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_generate_different_seeds_differ() {
    let model = SModel::default();
    let a = model.generate_seeded(64, 1, 42).unwrap();
    let b = model.generate_seeded(64, 1, 43).unwrap();
    assert_ne!(a.data(), b.data());
}

#[test]
fn test_shared_stream_advances_between_calls() {
    let model = SModel::default();
    let mut rng = DeterministicRng::new(5);
    let a = model.generate(32, 1, &mut rng).unwrap();
    let b = model.generate(32, 1, &mut rng).unwrap();
    assert_ne!(a.data(), b.data());
}

// ========================================================================
// Output Shape and Normalization Tests
// ========================================================================

#[test]
fn test_generate_1d_small() {
    let field = SModel::default().generate_seeded(16, 1, 7).unwrap();
    assert_eq!(field.shape(), &[16]);
    assert_unit_std(&field);
    assert!(field.min() < field.max());
}

#[test]
fn test_generate_minimal_2d() {
    let field = SModel::default().generate_seeded(4, 2, 7).unwrap();
    assert_eq!(field.shape(), &[4, 4]);
    assert_unit_std(&field);
}

#[test]
fn test_generate_3d() {
    let model = SModel::new(CascadeParams {
        kernel: InterpolationKernel::Linear,
        ..CascadeParams::default()
    })
    .unwrap();
    let field = model.generate_seeded(16, 3, 9).unwrap();
    assert_eq!(field.shape(), &[16, 16, 16]);
    assert_unit_std(&field);
}

#[test]
fn test_every_kernel_and_distribution_2d() {
    for kernel in InterpolationKernel::ALL {
        for distribution in Distribution::ALL {
            let model = SModel::new(CascadeParams {
                kernel,
                distribution,
                ..CascadeParams::default()
            })
            .unwrap();
            let field = model.generate_seeded(32, 2, 3).unwrap();
            assert_eq!(field.shape(), &[32, 32]);
            assert!(field.data().iter().all(|v| v.is_finite()));
            assert_unit_std(&field);
        }
    }
}

#[test]
fn test_coin_flip_mode_generates() {
    let params = CascadeParams::default().with_redistribution(Redistribution::CoinFlip);
    let field = SModel::new(params).unwrap().generate_seeded(64, 2, 1).unwrap();
    assert_unit_std(&field);
}

// ========================================================================
// Error Tests
// ========================================================================

#[test]
fn test_bogus_kernel_is_rejected() {
    let err = SModel::from_names(0.3, "bogus", "uniform").unwrap_err();
    assert!(matches!(err, GenerateError::Param(ParamError::UnsupportedKernel(ref k)) if k == "bogus"));
}

#[test]
fn test_bogus_distribution_is_rejected() {
    let err = SModel::from_names(0.3, "nearest", "cauchy").unwrap_err();
    assert!(matches!(err, GenerateError::Param(ParamError::UnsupportedDistribution(_))));
}

#[test]
fn test_non_power_of_two_is_rejected() {
    let err = SModel::default().generate_seeded(100, 1, 1).unwrap_err();
    assert!(matches!(err, GenerateError::InvalidResolution { n: 100, .. }));
    assert_eq!(err.code(), "FIELD_001");
}

#[test]
fn test_zero_dimensions_is_rejected() {
    let err = SModel::default().generate_seeded(16, 0, 1).unwrap_err();
    assert!(matches!(err, GenerateError::InvalidResolution { s_dim: 0, .. }));
}

#[test]
fn test_too_small_resolution_is_degenerate() {
    for n in [1, 2] {
        let err = SModel::default().generate_seeded(n, 1, 1).unwrap_err();
        assert!(matches!(err, GenerateError::DegenerateOutput { std } if std == 0.0));
        assert_eq!(err.code(), "FIELD_002");
    }
}

#[test]
fn test_probability_one_collapses() {
    let model = SModel::new(CascadeParams {
        cascade_probability: 1.0,
        ..CascadeParams::default()
    })
    .unwrap();
    let err = model.generate_seeded(16, 1, 1).unwrap_err();
    assert!(matches!(err, GenerateError::DegenerateOutput { .. }));
}

// ========================================================================
// Ensemble Tests
// ========================================================================

#[test]
fn test_ensemble_members_are_reproducible() {
    let model = SModel::default();
    let members = model.ensemble(32, 1, 100, 3).unwrap();
    assert_eq!(members.len(), 3);
    assert_ne!(members[0], members[1]);

    let seed = DeterministicRng::derive_realization_seed(100, 2);
    let again = model.generate_seeded(32, 1, seed).unwrap();
    assert_eq!(members[2], again);
}

#[test]
fn test_model_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SModel>();
}
