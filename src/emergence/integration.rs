//! Integration: Whole-versus-Parts Deficit
//!
//! The discretised field is split into disjoint parts of equal size (left
//! and right halves, or four quadrants). With one alphabet shared by the
//! whole field and every part,
//!
//!   Φ_approx = H(whole) - (1/n) Σᵢ H(partᵢ)
//!
//! Positive: the whole field carries more information than a typical part,
//! i.e. the parts differ in content. Zero: every part looks like the whole.
//! Negative is possible when the parts drop a remainder row or column
//! (odd dimensions) that is more ordered than the rest.
//!
//! This is a proxy in the spirit of integrated information, not an IIT Φ
//! computation (no minimum-information partition search, no dynamics).

use ndarray::{s, ArrayView2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{InfoError, Result};
use crate::information::{entropy, Binning};

/// How the field is split into parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Partition {
    /// Left and right halves
    #[default]
    Halves,
    /// Four quadrants (top-left, top-right, bottom-left, bottom-right)
    Quadrants,
}

impl Partition {
    pub fn n_parts(&self) -> usize {
        match self {
            Partition::Halves => 2,
            Partition::Quadrants => 4,
        }
    }

    /// `(row splits, column splits)`
    fn grid(&self) -> (usize, usize) {
        match self {
            Partition::Halves => (1, 2),
            Partition::Quadrants => (2, 2),
        }
    }

    /// Equal-size parts; a remainder row or column is left out
    fn split<'a>(&self, field: ArrayView2<'a, usize>) -> Vec<ArrayView2<'a, usize>> {
        let (rows, cols) = field.dim();
        let (nr, nc) = self.grid();
        let (ph, pw) = (rows / nr, cols / nc);

        let mut parts = Vec::with_capacity(nr * nc);
        for i in 0..nr {
            for j in 0..nc {
                parts.push(field.slice_move(s![i * ph..(i + 1) * ph, j * pw..(j + 1) * pw]));
            }
        }
        parts
    }
}

/// Integration Φ_approx of a field, in bits (signed)
///
/// The field must be wide enough (and, for quadrants, tall enough) to give
/// every part at least one cell.
pub fn integration(field: ArrayView2<'_, f64>, partition: Partition, binning: Binning) -> Result<f64> {
    let (rows, cols) = field.dim();
    let (nr, nc) = partition.grid();
    if rows < nr || cols < nc {
        return Err(InfoError::insufficient("integration", nr.max(nc), rows.min(cols)));
    }

    let discrete = binning.discretize_field(field)?;
    let whole: Vec<usize> = discrete.symbols.iter().copied().collect();
    let h_whole = entropy(&whole)?;

    let parts = partition.split(discrete.symbols.view());
    let mut h_parts = 0.0;
    for part in &parts {
        let symbols: Vec<usize> = part.iter().copied().collect();
        h_parts += entropy(&symbols)?;
    }

    Ok(h_whole - h_parts / parts.len() as f64)
}
