//! Common validation utilities shared across backends.
//!
//! This module provides reusable validation functions for the cascade's
//! parameter types: resolutions, dimension counts, and probabilities.

use std::fmt;

/// Practical cap on the number of elements in a generated field.
///
/// The generator keeps several full-resolution buffers alive at once, so a
/// bound here prevents accidental OOMs from oversized requests.
pub const MAX_ELEMENTS: u64 = 1 << 26;

/// Upper bound on the number of dimensions a field may have.
pub const MAX_DIMENSIONS: usize = 8;

/// Error type for common validation failures.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonValidationError {
    /// Human-readable error message.
    pub message: String,
}

impl CommonValidationError {
    /// Creates a new validation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CommonValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CommonValidationError {}

/// Validate that a dimension count is in `[1, MAX_DIMENSIONS]`.
///
/// # Example
/// ```
/// use smodel_spec::validation::common::validate_dimensions;
///
/// assert!(validate_dimensions(1).is_ok());
/// assert!(validate_dimensions(0).is_err());
/// ```
pub fn validate_dimensions(s_dim: usize) -> Result<(), CommonValidationError> {
    if s_dim == 0 {
        return Err(CommonValidationError::new(
            "dimension count must be at least 1, got 0",
        ));
    }
    if s_dim > MAX_DIMENSIONS {
        return Err(CommonValidationError::new(format!(
            "dimension count is too large: max is {}, got {}",
            MAX_DIMENSIONS, s_dim
        )));
    }
    Ok(())
}

/// Validate that a cascade resolution is a positive power of two and that
/// `n^s_dim` stays under [`MAX_ELEMENTS`].
///
/// # Arguments
/// * `n` - Size along every axis
/// * `s_dim` - Number of axes
///
/// # Returns
/// * `Ok(())` if the resolution is valid
/// * `Err(CommonValidationError)` if `n` is zero, not a power of two, or too large
///
/// # Example
/// ```
/// use smodel_spec::validation::common::validate_resolution;
///
/// assert!(validate_resolution(2048, 1).is_ok());
/// assert!(validate_resolution(64, 3).is_ok());
/// assert!(validate_resolution(100, 1).is_err());
/// ```
pub fn validate_resolution(n: usize, s_dim: usize) -> Result<(), CommonValidationError> {
    validate_dimensions(s_dim)?;

    if n == 0 {
        return Err(CommonValidationError::new(
            "resolution must be a positive power of two, got 0",
        ));
    }
    if !n.is_power_of_two() {
        return Err(CommonValidationError::new(format!(
            "resolution must be a power of two, got {}",
            n
        )));
    }

    let elements = (n as u64).checked_pow(s_dim as u32);
    match elements {
        Some(count) if count <= MAX_ELEMENTS => Ok(()),
        Some(count) => Err(CommonValidationError::new(format!(
            "resolution is too large: max is {} elements, got {}^{} = {}",
            MAX_ELEMENTS, n, s_dim, count
        ))),
        None => Err(CommonValidationError::new(format!(
            "resolution is too large: {}^{} overflows",
            n, s_dim
        ))),
    }
}

/// Validate that a probability is finite.
///
/// Finite values outside `(0, 0.5]` are accepted here; see
/// [`is_cascading_probability`] for the range that produces a multifractal.
///
/// # Example
/// ```
/// use smodel_spec::validation::common::validate_probability;
///
/// assert!(validate_probability("p", 0.3).is_ok());
/// assert!(validate_probability("p", 0.9).is_ok());
/// assert!(validate_probability("p", f64::NAN).is_err());
/// ```
pub fn validate_probability(name: &str, value: f64) -> Result<(), CommonValidationError> {
    if !value.is_finite() {
        return Err(CommonValidationError::new(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Whether `p` lies in `(0, 0.5]`, the range where redistribution yields a
/// non-degenerate cascade.
#[inline]
pub fn is_cascading_probability(p: f64) -> bool {
    p > 0.0 && p <= 0.5
}
