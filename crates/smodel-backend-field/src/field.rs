//! Dense N-dimensional scalar fields.

use serde::Serialize;

use crate::error::{FieldResult, GenerateError};

/// Dense N-dimensional array of `f64` values.
///
/// Data is stored row-major (the last axis varies fastest), so a field of
/// shape `[rows, cols]` lays out one row after another.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    /// Extent along each axis.
    shape: Vec<usize>,
    /// Flat-index step for each axis.
    #[serde(skip)]
    strides: Vec<usize>,
    /// Element data, row-major.
    data: Vec<f64>,
}

/// Summary statistics over every element of a field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldStats {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std: f64,
    /// Smallest element.
    pub min: f64,
    /// Largest element.
    pub max: f64,
}

fn row_major_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![1; shape.len()];
    for axis in (0..shape.len().saturating_sub(1)).rev() {
        strides[axis] = strides[axis + 1] * shape[axis + 1];
    }
    strides
}

impl Field {
    /// Create a new field filled with a value.
    pub fn new(shape: Vec<usize>, fill: f64) -> Self {
        let size = shape.iter().product();
        let strides = row_major_strides(&shape);
        Self {
            shape,
            strides,
            data: vec![fill; size],
        }
    }

    /// Create a field with `s_dim` axes of extent `n` each.
    pub fn cube(n: usize, s_dim: usize, fill: f64) -> Self {
        Self::new(vec![n; s_dim], fill)
    }

    /// Wrap existing row-major data.
    ///
    /// Fails with [`GenerateError::ShapeMismatch`] if `data.len()` does not
    /// equal the product of `shape`.
    pub fn from_vec(shape: Vec<usize>, data: Vec<f64>) -> FieldResult<Self> {
        let size: usize = shape.iter().product();
        if size != data.len() {
            return Err(GenerateError::shape_mismatch(&shape, &[data.len()]));
        }
        let strides = row_major_strides(&shape);
        Ok(Self {
            shape,
            strides,
            data,
        })
    }

    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Number of axes.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Reinterpret the data under a new shape with the same element count.
    pub fn reshape(self, shape: Vec<usize>) -> FieldResult<Self> {
        Self::from_vec(shape, self.data)
    }

    /// Flat offset of a multi-index.
    #[inline]
    pub fn flat_index(&self, index: &[usize]) -> usize {
        debug_assert_eq!(index.len(), self.shape.len());
        index
            .iter()
            .zip(&self.strides)
            .map(|(&i, &stride)| i * stride)
            .sum()
    }

    /// Get the element at a multi-index.
    #[inline]
    pub fn get(&self, index: &[usize]) -> f64 {
        self.data[self.flat_index(index)]
    }

    /// Set the element at a multi-index.
    #[inline]
    pub fn set(&mut self, index: &[usize], value: f64) {
        let idx = self.flat_index(index);
        self.data[idx] = value;
    }

    /// Multiply the even-indexed slice along `axis` by `even` and the
    /// odd-indexed slice by `odd`, holding every other axis fixed.
    pub fn scale_axis_parity(&mut self, axis: usize, even: f64, odd: f64) {
        let extent = self.shape[axis];
        let stride = self.strides[axis];
        for (flat, value) in self.data.iter_mut().enumerate() {
            let along = (flat / stride) % extent;
            *value *= if along % 2 == 0 { even } else { odd };
        }
    }

    /// Apply `f` to every element in place.
    pub fn map_inplace(&mut self, mut f: impl FnMut(f64) -> f64) {
        for value in &mut self.data {
            *value = f(*value);
        }
    }

    /// Combine with another field of the same shape, element by element:
    /// `self[i] = f(self[i], other[i])`.
    pub fn zip_apply(&mut self, other: &Field, mut f: impl FnMut(f64, f64) -> f64) -> FieldResult<()> {
        if self.shape != other.shape {
            return Err(GenerateError::shape_mismatch(&self.shape, &other.shape));
        }
        for (value, &rhs) in self.data.iter_mut().zip(&other.data) {
            *value = f(*value, rhs);
        }
        Ok(())
    }

    /// Arithmetic mean of all elements (NaN for an empty field).
    pub fn mean(&self) -> f64 {
        self.data.iter().sum::<f64>() / self.data.len() as f64
    }

    /// Population standard deviation of all elements.
    pub fn std(&self) -> f64 {
        let mean = self.mean();
        let variance = self
            .data
            .iter()
            .map(|&v| (v - mean) * (v - mean))
            .sum::<f64>()
            / self.data.len() as f64;
        variance.sqrt()
    }

    pub fn min(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn stats(&self) -> FieldStats {
        FieldStats {
            mean: self.mean(),
            std: self.std(),
            min: self.min(),
            max: self.max(),
        }
    }

    /// Subtract the mean from every element.
    pub fn center(&mut self) {
        let mean = self.mean();
        self.map_inplace(|v| v - mean);
    }
}
