//! Cascade generator parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParamError;
use crate::validation::validate_params;

/// Default resolution along every axis.
pub const DEFAULT_RESOLUTION: usize = 2048;

/// Default number of axes (a time-series).
pub const DEFAULT_DIMENSIONS: usize = 1;

/// Parameters shared by every generation call of a cascade generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CascadeParams {
    /// Weight applied to even sub-cells; odd sub-cells get `1 - p`.
    #[serde(default = "default_cascade_probability")]
    pub cascade_probability: f64,
    /// Kernel used to upsample each octave to the output resolution.
    #[serde(default)]
    pub kernel: InterpolationKernel,
    /// Distribution of the per-octave random seed field.
    #[serde(default)]
    pub distribution: Distribution,
    /// How the even/odd weights are assigned per axis.
    #[serde(default)]
    pub redistribution: Redistribution,
}

pub(crate) fn default_cascade_probability() -> f64 {
    0.3
}

impl Default for CascadeParams {
    fn default() -> Self {
        Self {
            cascade_probability: default_cascade_probability(),
            kernel: InterpolationKernel::default(),
            distribution: Distribution::default(),
            redistribution: Redistribution::default(),
        }
    }
}

impl CascadeParams {
    /// Builds parameters from kernel and distribution names.
    ///
    /// Names are resolved here, so an unknown kernel or distribution fails
    /// immediately with [`ParamError::UnsupportedKernel`] or
    /// [`ParamError::UnsupportedDistribution`].
    ///
    /// # Example
    /// ```
    /// use smodel_spec::{CascadeParams, InterpolationKernel, ParamError};
    ///
    /// let params = CascadeParams::from_names(0.3, "cubic", "normal").unwrap();
    /// assert_eq!(params.kernel, InterpolationKernel::Cubic);
    ///
    /// let err = CascadeParams::from_names(0.3, "bogus", "uniform").unwrap_err();
    /// assert_eq!(err, ParamError::UnsupportedKernel("bogus".into()));
    /// ```
    pub fn from_names(
        cascade_probability: f64,
        kernel: &str,
        distribution: &str,
    ) -> Result<Self, ParamError> {
        let params = Self {
            cascade_probability,
            kernel: kernel.parse()?,
            distribution: distribution.parse()?,
            redistribution: Redistribution::default(),
        };
        params.validate()?;
        Ok(params)
    }

    /// Sets the redistribution mode.
    pub fn with_redistribution(mut self, redistribution: Redistribution) -> Self {
        self.redistribution = redistribution;
        self
    }

    /// Validates the parameter set.
    pub fn validate(&self) -> Result<(), ParamError> {
        validate_params(self)
    }
}

/// Interpolation kernel used for upsampling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationKernel {
    /// Value of the nearest source node.
    #[default]
    Nearest,
    /// Piecewise linear (simplicial in more than one dimension).
    Linear,
    /// Not-a-knot cubic spline (tensor product in more than one dimension).
    Cubic,
}

impl InterpolationKernel {
    /// All supported kernels.
    pub const ALL: [InterpolationKernel; 3] = [
        InterpolationKernel::Nearest,
        InterpolationKernel::Linear,
        InterpolationKernel::Cubic,
    ];

    /// Returns the kernel name.
    pub fn as_str(&self) -> &'static str {
        match self {
            InterpolationKernel::Nearest => "nearest",
            InterpolationKernel::Linear => "linear",
            InterpolationKernel::Cubic => "cubic",
        }
    }

    /// Minimum number of source nodes per axis the kernel needs.
    pub fn min_points(&self) -> usize {
        match self {
            InterpolationKernel::Nearest => 1,
            InterpolationKernel::Linear => 2,
            InterpolationKernel::Cubic => 4,
        }
    }
}

impl fmt::Display for InterpolationKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterpolationKernel {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nearest" => Ok(InterpolationKernel::Nearest),
            "linear" => Ok(InterpolationKernel::Linear),
            "cubic" => Ok(InterpolationKernel::Cubic),
            other => Err(ParamError::UnsupportedKernel(other.to_string())),
        }
    }
}

/// Distribution of the random seed field drawn at every octave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distribution {
    /// Uniform on `[0, 1)`.
    #[default]
    Uniform,
    /// Centered normal with standard deviation `1 / sqrt(max(shape))`.
    Normal,
}

impl Distribution {
    /// All supported distributions.
    pub const ALL: [Distribution; 2] = [Distribution::Uniform, Distribution::Normal];

    /// Returns the distribution name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Distribution::Uniform => "uniform",
            Distribution::Normal => "normal",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Distribution {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniform" => Ok(Distribution::Uniform),
            "normal" => Ok(Distribution::Normal),
            other => Err(ParamError::UnsupportedDistribution(other.to_string())),
        }
    }
}

/// How the even/odd weights are assigned along each axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Redistribution {
    /// Even slices always get `p`, odd slices `1 - p`. A coin is still
    /// flipped per axis so the random stream is consumed identically in
    /// both modes.
    #[default]
    Fixed,
    /// Even/odd roles swap on axes whose coin flip comes up heads.
    CoinFlip,
}

impl Redistribution {
    /// Returns the mode name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Redistribution::Fixed => "fixed",
            Redistribution::CoinFlip => "coin_flip",
        }
    }
}

impl fmt::Display for Redistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Redistribution {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(Redistribution::Fixed),
            "coin_flip" => Ok(Redistribution::CoinFlip),
            other => Err(ParamError::UnsupportedRedistribution(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let params = CascadeParams::default();
        assert_eq!(params.cascade_probability, 0.3);
        assert_eq!(params.kernel, InterpolationKernel::Nearest);
        assert_eq!(params.distribution, Distribution::Uniform);
        assert_eq!(params.redistribution, Redistribution::Fixed);
    }

    #[test]
    fn test_from_names() {
        let params = CascadeParams::from_names(0.25, "linear", "normal").unwrap();
        assert_eq!(params.cascade_probability, 0.25);
        assert_eq!(params.kernel, InterpolationKernel::Linear);
        assert_eq!(params.distribution, Distribution::Normal);
    }

    #[test]
    fn test_from_names_rejects_unknown_kernel() {
        let err = CascadeParams::from_names(0.3, "bogus", "uniform").unwrap_err();
        assert_eq!(err, ParamError::UnsupportedKernel("bogus".to_string()));
    }

    #[test]
    fn test_from_names_rejects_unknown_distribution() {
        let err = CascadeParams::from_names(0.3, "nearest", "poisson").unwrap_err();
        assert_eq!(err, ParamError::UnsupportedDistribution("poisson".to_string()));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!("Nearest".parse::<InterpolationKernel>().is_err());
        assert!("UNIFORM".parse::<Distribution>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for kernel in InterpolationKernel::ALL {
            assert_eq!(kernel.to_string().parse::<InterpolationKernel>().unwrap(), kernel);
        }
        for dist in Distribution::ALL {
            assert_eq!(dist.to_string().parse::<Distribution>().unwrap(), dist);
        }
        for mode in [Redistribution::Fixed, Redistribution::CoinFlip] {
            assert_eq!(mode.to_string().parse::<Redistribution>().unwrap(), mode);
        }
    }

    #[test]
    fn test_kernel_min_points() {
        assert_eq!(InterpolationKernel::Nearest.min_points(), 1);
        assert_eq!(InterpolationKernel::Linear.min_points(), 2);
        assert_eq!(InterpolationKernel::Cubic.min_points(), 4);
    }

    #[test]
    fn test_with_redistribution() {
        let params = CascadeParams::default().with_redistribution(Redistribution::CoinFlip);
        assert_eq!(params.redistribution, Redistribution::CoinFlip);
    }
}
