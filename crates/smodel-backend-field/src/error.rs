//! Error types for field generation.

use smodel_spec::{BackendError, InterpolationKernel, ParamError};
use thiserror::Error;

/// Result type for field operations.
pub type FieldResult<T> = Result<T, GenerateError>;

/// Errors that can occur during field generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Parameter error: unsupported kernel or distribution name, or an
    /// invalid probability.
    #[error(transparent)]
    Param(#[from] ParamError),

    /// Resolution is not a positive power of two, the dimension count is
    /// out of range, or the field would be too large.
    #[error("invalid resolution {n} in {s_dim} dimension(s): {reason}")]
    InvalidResolution {
        /// Requested size along every axis.
        n: usize,
        /// Requested number of axes.
        s_dim: usize,
        /// Why the request was rejected.
        reason: String,
    },

    /// The accumulated field has zero (or non-finite) spread and cannot be
    /// standardized.
    #[error("degenerate output: standard deviation {std} cannot normalize the field")]
    DegenerateOutput {
        /// The offending standard deviation.
        std: f64,
    },

    /// The source grid is too coarse for the requested kernel.
    #[error("{kernel} interpolation needs at least {required} points per axis, got {points}")]
    TooFewPoints {
        /// Kernel that was requested.
        kernel: InterpolationKernel,
        /// Minimum points per axis for the kernel.
        required: usize,
        /// Smallest axis extent found.
        points: usize,
    },

    /// Two fields (or a field and a coordinate set) disagree on shape.
    #[error("shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        /// Expected shape.
        expected: Vec<usize>,
        /// Shape actually supplied.
        found: Vec<usize>,
    },
}

impl GenerateError {
    /// Creates a shape mismatch error.
    pub fn shape_mismatch(expected: &[usize], found: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            found: found.to_vec(),
        }
    }
}

impl BackendError for GenerateError {
    fn code(&self) -> &'static str {
        match self {
            GenerateError::Param(inner) => inner.code(),
            GenerateError::InvalidResolution { .. } => "FIELD_001",
            GenerateError::DegenerateOutput { .. } => "FIELD_002",
            GenerateError::TooFewPoints { .. } => "FIELD_003",
            GenerateError::ShapeMismatch { .. } => "FIELD_004",
        }
    }

    fn category(&self) -> &'static str {
        match self {
            GenerateError::Param(inner) => inner.category(),
            _ => "field",
        }
    }
}
