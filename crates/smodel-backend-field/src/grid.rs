//! Normalized grid coordinates.
//!
//! A [`CoordinateSet`] describes where the elements of a field sit in the
//! unit hypercube: axis `d` of extent `m` places its nodes at
//! `linspace(0, 1, m)`. Points are enumerated in the same row-major order as
//! [`Field`](crate::Field) data, so the i-th point is the coordinate of the
//! i-th flat element.

/// `count` evenly spaced values covering `[0, 1]`, endpoints included.
///
/// A single node sits at 0. The last node is exactly 1.
pub fn linspace(count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let step = 1.0 / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| i as f64 * step).collect();
            values[count - 1] = 1.0;
            values
        }
    }
}

/// Normalized coordinates of every element of a rectilinear grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateSet {
    axes: Vec<Vec<f64>>,
}

impl CoordinateSet {
    /// Coordinates of a grid of the given shape.
    pub fn for_shape(shape: &[usize]) -> Self {
        Self {
            axes: shape.iter().map(|&m| linspace(m)).collect(),
        }
    }

    /// Coordinates of an `n`-per-axis grid with `s_dim` axes.
    pub fn cube(n: usize, s_dim: usize) -> Self {
        Self::for_shape(&vec![n; s_dim])
    }

    /// Build from explicit per-axis coordinates.
    ///
    /// Values need not lie in `[0, 1]`; kernels that cannot extrapolate
    /// report NaN for points outside the unit hypercube.
    pub fn from_axes(axes: Vec<Vec<f64>>) -> Self {
        Self { axes }
    }

    /// Per-axis coordinate values.
    pub fn axes(&self) -> &[Vec<f64>] {
        &self.axes
    }

    pub fn ndim(&self) -> usize {
        self.axes.len()
    }

    /// Extent of the grid along each axis.
    pub fn shape(&self) -> Vec<usize> {
        self.axes.iter().map(Vec::len).collect()
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.axes.iter().map(Vec::len).product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over every point in row-major order.
    pub fn points(&self) -> Points<'_> {
        Points {
            axes: &self.axes,
            index: vec![0; self.axes.len()],
            remaining: self.len(),
        }
    }
}

/// Row-major iterator over the points of a [`CoordinateSet`].
pub struct Points<'a> {
    axes: &'a [Vec<f64>],
    index: Vec<usize>,
    remaining: usize,
}

impl Iterator for Points<'_> {
    type Item = Vec<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let point = self
            .index
            .iter()
            .zip(self.axes)
            .map(|(&i, axis)| axis[i])
            .collect();

        self.remaining -= 1;
        for axis in (0..self.index.len()).rev() {
            self.index[axis] += 1;
            if self.index[axis] < self.axes[axis].len() {
                break;
            }
            self.index[axis] = 0;
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Points<'_> {}
