//! Piecewise-linear interpolation over a simplicial decomposition.
//!
//! Each grid cell is split into `d!` simplices (the Kuhn triangulation): the
//! simplex containing a point is picked by sorting its in-cell fractions in
//! descending order, and the value is the barycentric blend of that
//! simplex's corners. In one dimension this is ordinary linear
//! interpolation between neighbors.

use super::{for_each_index, locate, GridInterpolator};
use crate::error::FieldResult;
use crate::field::Field;
use crate::grid::CoordinateSet;

pub(crate) struct LinearInterpolator;

/// Where one target coordinate falls on a source axis.
#[derive(Clone, Copy)]
struct AxisCell {
    /// Flat offset of the cell's lower node along this axis.
    offset: usize,
    /// Fraction into the cell, in `[0, 1]`.
    frac: f64,
}

impl GridInterpolator for LinearInterpolator {
    fn resample(&self, source: &Field, targets: &CoordinateSet) -> FieldResult<Field> {
        let cells: Vec<Vec<Option<AxisCell>>> = targets
            .axes()
            .iter()
            .enumerate()
            .map(|(axis, coords)| {
                let extent = source.shape()[axis];
                let stride = source.strides()[axis];
                coords
                    .iter()
                    .map(|&x| {
                        locate(extent, x).map(|(cell, frac)| AxisCell {
                            offset: cell * stride,
                            frac,
                        })
                    })
                    .collect()
            })
            .collect();

        let ndim = source.ndim();
        let strides = source.strides();
        let values = source.data();
        let shape = targets.shape();
        let mut data = Vec::with_capacity(targets.len());
        let mut order: Vec<usize> = (0..ndim).collect();
        let mut fracs = vec![0.0; ndim];

        for_each_index(&shape, |index| {
            let mut base = 0;
            for (axis, &i) in index.iter().enumerate() {
                match cells[axis][i] {
                    Some(cell) => {
                        base += cell.offset;
                        fracs[axis] = cell.frac;
                    }
                    None => {
                        data.push(f64::NAN);
                        return;
                    }
                }
            }

            order.sort_unstable_by(|&a, &b| fracs[b].total_cmp(&fracs[a]));

            // Walk from the lower corner toward the upper one, stepping along
            // axes in order of decreasing fraction.
            let mut corner = base;
            let mut value = (1.0 - fracs[order[0]]) * values[corner];
            for k in 0..ndim {
                corner += strides[order[k]];
                let next = if k + 1 < ndim { fracs[order[k + 1]] } else { 0.0 };
                value += (fracs[order[k]] - next) * values[corner];
            }
            data.push(value);
        });

        Field::from_vec(shape, data)
    }
}
