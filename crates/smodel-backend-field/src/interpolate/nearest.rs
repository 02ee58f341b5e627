//! Nearest-neighbor interpolation.
//!
//! On a rectilinear grid the Euclidean nearest node is the nearest node
//! along each axis independently, so lookups are resolved per axis. A query
//! exactly halfway between two nodes takes the lower one.

use super::{for_each_index, GridInterpolator};
use crate::error::FieldResult;
use crate::field::Field;
use crate::grid::CoordinateSet;

pub(crate) struct NearestInterpolator;

/// Index of the node nearest to `x` on an axis of `extent` nodes.
fn nearest_node(extent: usize, x: f64) -> usize {
    if extent < 2 || x.is_nan() {
        return 0;
    }
    let t = x * (extent - 1) as f64;
    let idx = (t - 0.5).ceil();
    idx.clamp(0.0, (extent - 1) as f64) as usize
}

impl GridInterpolator for NearestInterpolator {
    fn resample(&self, source: &Field, targets: &CoordinateSet) -> FieldResult<Field> {
        // Flat offset contributed by each target coordinate, per axis.
        let offsets: Vec<Vec<usize>> = targets
            .axes()
            .iter()
            .enumerate()
            .map(|(axis, coords)| {
                let extent = source.shape()[axis];
                let stride = source.strides()[axis];
                coords
                    .iter()
                    .map(|&x| nearest_node(extent, x) * stride)
                    .collect()
            })
            .collect();

        let shape = targets.shape();
        let mut data = Vec::with_capacity(targets.len());
        let values = source.data();
        for_each_index(&shape, |index| {
            let flat: usize = index
                .iter()
                .zip(&offsets)
                .map(|(&i, axis_offsets)| axis_offsets[i])
                .sum();
            data.push(values[flat]);
        });

        Field::from_vec(shape, data)
    }
}
