//! Multi-scale Complexity from the Block-Entropy Curve
//!
//! Block entropy is normalised to an entropy density per cell,
//!
//!   h_k = H_k / k²
//!
//! and the complexity score is the drop in density from the smallest to the
//! largest scale, divided by the number of scales m:
//!
//!   C = (h_{k_min} - h_{k_max}) / m
//!
//! Fields that are disordered cell-by-cell but repeat at coarser scales
//! score high; uniform fields score 0. The finite-sample saturation of
//! block entropy at large `k` (see the spatial module) also lowers `h_{k_max}`,
//! so C is only comparable between fields of the same size. Loosely
//! inspired by Tononi-Sporns-Edelman complexity; not that estimator.

use ndarray::ArrayView2;

use crate::error::{InfoError, Result};
use crate::information::Binning;
use crate::spatial::block_entropy_curve;

/// Entropy density `H_k / k²` for each `(k, H_k)` point of a curve
pub fn entropy_density(curve: &[(usize, f64)]) -> Vec<(usize, f64)> {
    curve
        .iter()
        .map(|&(k, h)| (k, h / (k * k) as f64))
        .collect()
}

/// Complexity score C in bits per cell
///
/// Needs at least two of `scales` to fit inside the field.
pub fn complexity_measure(
    field: ArrayView2<'_, f64>,
    scales: &[usize],
    binning: Binning,
) -> Result<f64> {
    let curve = block_entropy_curve(field, scales, binning)?;
    if curve.len() < 2 {
        return Err(InfoError::insufficient("complexity_measure", 2, curve.len()));
    }

    let density = entropy_density(&curve);
    let (_, first) = density[0];
    let (_, last) = density[density.len() - 1];
    Ok((first - last) / density.len() as f64)
}
