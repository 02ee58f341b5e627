//! Parameter validation.

pub mod common;

use tracing::warn;

use crate::error::ParamError;
use crate::params::CascadeParams;

/// Validates a full parameter set.
///
/// Only non-finite probabilities are rejected. A finite probability outside
/// `(0, 0.5]` is accepted and logged, since the resulting field is merely
/// degenerate rather than invalid.
pub fn validate_params(params: &CascadeParams) -> Result<(), ParamError> {
    common::validate_probability("cascade_probability", params.cascade_probability)
        .map_err(|e| ParamError::invalid_param("cascade_probability", e.message))?;

    if !common::is_cascading_probability(params.cascade_probability) {
        warn!(
            p = params.cascade_probability,
            "cascade probability outside (0, 0.5]; output will not be multifractal"
        );
    }
    Ok(())
}
