//! Block Entropy: Multi-scale Structure of a Field
//!
//! The field is tiled with non-overlapping `k×k` blocks; each block's full
//! symbol pattern is one composite symbol. A remainder row/column that does
//! not fill a whole block is discarded.
//!
//! ## Estimator Bias
//!
//! Larger blocks admit more patterns but yield fewer samples (`⌊R/k⌋·⌊C/k⌋`),
//! so the curve is not guaranteed to be monotone in `k`. Once the number of
//! blocks is small relative to the number of possible patterns, the estimate
//! saturates at `log₂(#blocks)`.

use ndarray::{Array2, ArrayView2};
use tracing::debug;

use crate::error::{InfoError, Result};
use crate::information::{joint_entropy, Binning};

/// Block sizes swept by default
pub const DEFAULT_BLOCK_SCALES: [usize; 4] = [1, 2, 4, 8];

/// Entropy (bits) of the distribution of `k×k` block patterns
pub fn block_entropy(field: ArrayView2<'_, f64>, k: usize, binning: Binning) -> Result<f64> {
    if k == 0 {
        return Err(InfoError::invalid("block size must be positive"));
    }
    let discrete = binning.discretize_field(field)?;
    block_entropy_of(&discrete.symbols, k)
}

/// Block entropy at each scale, as ordered `(k, bits)` pairs
///
/// Scales are visited in increasing order with duplicates removed. Scales
/// larger than the field are left out of the curve; if none fit the result
/// is `InsufficientSamples`.
pub fn block_entropy_curve(
    field: ArrayView2<'_, f64>,
    scales: &[usize],
    binning: Binning,
) -> Result<Vec<(usize, f64)>> {
    if scales.is_empty() {
        return Err(InfoError::invalid("block entropy curve needs at least one scale"));
    }
    if scales.contains(&0) {
        return Err(InfoError::invalid("block size must be positive"));
    }

    let discrete = binning.discretize_field(field)?;
    let (rows, cols) = discrete.symbols.dim();

    let mut sorted = scales.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut curve = Vec::with_capacity(sorted.len());
    for k in sorted {
        if k > rows || k > cols {
            debug!(k, rows, cols, "block scale exceeds field, skipped");
            continue;
        }
        curve.push((k, block_entropy_of(&discrete.symbols, k)?));
    }

    if curve.is_empty() {
        return Err(InfoError::insufficient("block_entropy_curve", 1, 0));
    }
    Ok(curve)
}

fn block_entropy_of(symbols: &Array2<usize>, k: usize) -> Result<f64> {
    let blocks = block_patterns(symbols, k);
    if blocks.is_empty() {
        let (rows, cols) = symbols.dim();
        return Err(InfoError::insufficient("block_entropy", k, rows.min(cols)));
    }
    joint_entropy(&blocks)
}

/// Row-major patterns of every complete `k×k` block
fn block_patterns(symbols: &Array2<usize>, k: usize) -> Vec<Vec<usize>> {
    symbols
        .exact_chunks((k, k))
        .into_iter()
        .map(|block| block.iter().copied().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_block_entropy_scale_one_is_shannon() {
        let field = array![[0.0, 1.0, 1.0, 0.0], [1.0, 1.0, 0.0, 0.0]];
        let h1 = block_entropy(field.view(), 1, Binning::default()).unwrap();
        let h = crate::spatial::shannon_entropy(field.view(), Binning::default()).unwrap();
        assert!((h1 - h).abs() < 1e-12);
    }

    #[test]
    fn test_block_entropy_checkerboard() {
        // Every aligned 2×2 block of a checkerboard is the same pattern
        let field = Array2::from_shape_fn((8, 8), |(i, j)| ((i + j) % 2) as f64);
        assert_eq!(block_entropy(field.view(), 2, Binning::default()).unwrap(), 0.0);
    }

    #[test]
    fn test_block_entropy_discards_remainder() {
        // 5×5 field: only the top-left 4×4 contributes at k = 2
        let mut field = Array2::from_elem((5, 5), 0.0);
        field[[4, 4]] = 1.0;
        field[[0, 4]] = 1.0;
        assert_eq!(block_entropy(field.view(), 2, Binning::default()).unwrap(), 0.0);
    }

    #[test]
    fn test_block_entropy_two_patterns() {
        // Left half zeros, right half ones: two 2×2 patterns, equally frequent
        let field = Array2::from_shape_fn((4, 4), |(_, j)| if j < 2 { 0.0 } else { 1.0 });
        let h = block_entropy(field.view(), 2, Binning::default()).unwrap();
        assert!((h - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_block_entropy_errors() {
        let field = Array2::from_elem((4, 4), 1.0);
        assert!(matches!(
            block_entropy(field.view(), 0, Binning::default()),
            Err(InfoError::InvalidInput(_))
        ));
        let err = block_entropy(field.view(), 5, Binning::default()).unwrap_err();
        assert!(err.is_insufficient_samples());
    }

    #[test]
    fn test_curve_skips_oversized_scales() {
        let field = Array2::from_shape_fn((4, 4), |(i, j)| ((i * 3 + j) % 4) as f64);
        let curve = block_entropy_curve(field.view(), &[4, 1, 8, 2, 2], Binning::default()).unwrap();
        let scales: Vec<usize> = curve.iter().map(|&(k, _)| k).collect();
        assert_eq!(scales, vec![1, 2, 4]);
        // One 4×4 block: a single sample carries no uncertainty
        assert_eq!(curve[2].1, 0.0);
    }

    #[test]
    fn test_curve_no_fitting_scale() {
        let field = Array2::from_elem((3, 3), 1.0);
        let err = block_entropy_curve(field.view(), &[4, 8], Binning::default()).unwrap_err();
        assert!(err.is_insufficient_samples());
    }
}
