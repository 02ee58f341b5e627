//! SModel Cascade Parameter Library
//!
//! This crate provides the parameter types, validation, and shared error
//! traits for SModel multiplicative-cascade field generators.
//!
//! # Example
//!
//! ```
//! use smodel_spec::{CascadeParams, Distribution, InterpolationKernel};
//!
//! let params = CascadeParams::from_names(0.3, "nearest", "uniform").unwrap();
//! assert_eq!(params.kernel, InterpolationKernel::Nearest);
//! assert_eq!(params.distribution, Distribution::Uniform);
//!
//! // Parameters serialize to JSON so a run can be recorded alongside its data.
//! let json = serde_json::to_string(&params).unwrap();
//! assert!(json.contains("\"kernel\":\"nearest\""));
//! ```
//!
//! # Modules
//!
//! - [`error`]: Parameter errors and the shared [`BackendError`] trait
//! - [`params`]: Cascade parameters and kernel/distribution enums
//! - [`validation`]: Parameter and resolution validation

pub mod error;
pub mod params;
pub mod validation;

pub use error::{BackendError, ParamError};
pub use params::{
    CascadeParams, Distribution, InterpolationKernel, Redistribution, DEFAULT_DIMENSIONS,
    DEFAULT_RESOLUTION,
};
