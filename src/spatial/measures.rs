//! Field Entropy and Spatial Mutual Information

use ndarray::{Array2, ArrayView2};

use crate::error::{InfoError, Result};
use crate::information::{mutual_information, Binning, EmpiricalDistribution};

/// Default neighbour offset `(dy, dx)`: the cell to the right
pub const DEFAULT_OFFSET: (isize, isize) = (0, 1);

/// Shannon entropy of the flattened field, in bits
///
/// Measures disorder of the value distribution, ignoring arrangement.
pub fn shannon_entropy(field: ArrayView2<'_, f64>, binning: Binning) -> Result<f64> {
    let discrete = binning.discretize_field(field)?;
    Ok(EmpiricalDistribution::from_samples(discrete.symbols.iter())?.entropy())
}

/// Mutual information between each cell and its neighbour at `offset`
///
///   I(X; Y) = H(X) + H(Y) - H(X, Y)
///
/// Only interior pairs are used: a cell whose neighbour falls outside the
/// grid is skipped, so no synthetic boundary state enters the estimate.
/// The offset `(0, 0)` pairs each cell with itself and yields `H(X)`.
pub fn spatial_mutual_information(
    field: ArrayView2<'_, f64>,
    offset: (isize, isize),
    binning: Binning,
) -> Result<f64> {
    let discrete = binning.discretize_field(field)?;
    let (xs, ys) = offset_pairs(&discrete.symbols, offset);

    if xs.is_empty() {
        let (rows, cols) = field.dim();
        return Err(InfoError::insufficient(
            "spatial_mutual_information",
            1,
            pair_count(rows, cols, offset),
        ));
    }

    mutual_information(&xs, &ys)
}

/// Split interior cells into aligned (cell, neighbour) symbol sequences
pub(crate) fn offset_pairs(
    symbols: &Array2<usize>,
    (dy, dx): (isize, isize),
) -> (Vec<usize>, Vec<usize>) {
    let (rows, cols) = symbols.dim();
    let capacity = pair_count(rows, cols, (dy, dx));
    let mut xs = Vec::with_capacity(capacity);
    let mut ys = Vec::with_capacity(capacity);

    for ((i, j), &x) in symbols.indexed_iter() {
        let ni = i as isize + dy;
        let nj = j as isize + dx;
        if ni < 0 || nj < 0 || ni >= rows as isize || nj >= cols as isize {
            continue;
        }
        xs.push(x);
        ys.push(symbols[[ni as usize, nj as usize]]);
    }

    (xs, ys)
}

fn pair_count(rows: usize, cols: usize, (dy, dx): (isize, isize)) -> usize {
    rows.saturating_sub(dy.unsigned_abs()) * cols.saturating_sub(dx.unsigned_abs())
}
