//! SModel Field Generation Backend
//!
//! This crate synthesizes N-dimensional scalar fields (time-series, images,
//! hypercubes) whose statistics follow a multiplicative cascade: at every
//! octave of scale, energy is redistributed between even and odd cells by a
//! cascading probability `p`, and the octaves are combined multiplicatively.
//!
//! # Features
//!
//! - **Random seed fields**: Uniform or scale-aware normal draws, zero mean
//! - **Redistribution**: Even/odd weighting along every axis
//! - **Upsampling**: Nearest, simplicial linear, and not-a-knot cubic kernels
//! - **Cascade**: Octave accumulation with unit-variance output
//!
//! # Example
//!
//! ```
//! use smodel_backend_field::SModel;
//! use smodel_spec::CascadeParams;
//!
//! let model = SModel::new(CascadeParams::default()).unwrap();
//! let series = model.generate_seeded(256, 1, 42).unwrap();
//! assert_eq!(series.shape(), &[256]);
//! assert!((series.std() - 1.0).abs() < 1e-9);
//! ```
//!
//! # Determinism
//!
//! - All randomness flows through an explicit [`DeterministicRng`] (PCG32)
//! - Same parameters + same seed = bit-identical output
//! - Independent generators never share random state

pub mod error;
pub mod field;
pub mod generate;
pub mod grid;
pub mod interpolate;
pub mod rng;
pub mod sample;
pub mod scale;

// Re-export main types for convenience
pub use error::{FieldResult, GenerateError};
pub use field::{Field, FieldStats};
pub use generate::{octave_scales, SModel};
pub use grid::{linspace, CoordinateSet};
pub use interpolate::{resample, CubicSpline};
pub use rng::DeterministicRng;
pub use sample::random_field;
