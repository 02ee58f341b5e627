//! Error types for cascade parameters and the shared backend error trait.

use thiserror::Error;

/// Errors raised while building or validating cascade parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// Interpolation kernel name is not one of `nearest`, `linear`, `cubic`.
    #[error("unsupported interpolation kernel '{0}' (expected nearest, linear, or cubic)")]
    UnsupportedKernel(String),

    /// Distribution name is not one of `uniform`, `normal`.
    #[error("unsupported distribution '{0}' (expected uniform or normal)")]
    UnsupportedDistribution(String),

    /// Redistribution mode name is not one of `fixed`, `coin_flip`.
    #[error("unsupported redistribution mode '{0}' (expected fixed or coin_flip)")]
    UnsupportedRedistribution(String),

    /// A parameter value failed validation.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },
}

impl ParamError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl BackendError for ParamError {
    fn code(&self) -> &'static str {
        match self {
            ParamError::UnsupportedKernel(_) => "PARAM_001",
            ParamError::UnsupportedDistribution(_) => "PARAM_002",
            ParamError::UnsupportedRedistribution(_) => "PARAM_003",
            ParamError::InvalidParameter { .. } => "PARAM_004",
        }
    }

    fn category(&self) -> &'static str {
        "params"
    }
}

/// Common trait for backend errors.
///
/// Each error type in the workspace implements this trait so that callers
/// can report failures uniformly:
/// - Stable error codes for programmatic handling
/// - Human-readable messages for users
///
/// # Example
///
/// ```
/// use smodel_spec::error::{BackendError, ParamError};
///
/// fn describe<E: BackendError>(err: &E) -> String {
///     format!("[{}] {}", err.code(), err.message())
/// }
///
/// let err = ParamError::UnsupportedKernel("bogus".into());
/// assert!(describe(&err).starts_with("[PARAM_001]"));
/// ```
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "PARAM_001" or "FIELD_003". These codes
    /// are stable and can be used for programmatic error handling.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}
