//! Discretizer: Continuous Samples → Finite Alphabet
//!
//! Every estimator in this crate is a plug-in histogram estimator, so raw
//! samples are first mapped to integer symbols `0..k`.
//!
//! ## Binning Policy
//!
//! - [`Binning::Auto`]: if the data holds at most `exact_threshold` distinct
//!   values, each distinct value becomes its own symbol (no quantization
//!   error). Otherwise the observed range is cut into `bins` equal-width
//!   intervals.
//! - [`Binning::Fixed`]: always `n` equal-width intervals over `[min, max]`.
//!
//! Constant input collapses to a single-symbol alphabet under both policies.

use ndarray::{Array2, ArrayView2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{InfoError, Result};

/// Distinct values at or below which [`Binning::Auto`] keeps values exact
pub const DEFAULT_EXACT_THRESHOLD: usize = 8;

/// Equal-width bin count used by [`Binning::Auto`] for continuous data
pub const DEFAULT_BINS: usize = 16;

/// How raw samples are mapped to symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Binning {
    /// Exact symbols for few distinct values, equal-width bins otherwise
    Auto {
        /// Maximum number of distinct values kept exact
        exact_threshold: usize,
        /// Bin count when the data is quantized
        bins: usize,
    },
    /// Always quantize into this many equal-width bins
    Fixed(usize),
}

impl Default for Binning {
    fn default() -> Self {
        Binning::Auto {
            exact_threshold: DEFAULT_EXACT_THRESHOLD,
            bins: DEFAULT_BINS,
        }
    }
}

impl From<Option<usize>> for Binning {
    fn from(bins: Option<usize>) -> Self {
        match bins {
            Some(n) => Binning::Fixed(n),
            None => Binning::default(),
        }
    }
}

/// How a particular input was quantized
///
/// Stored alongside results so a computation can be reproduced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Quantization {
    /// Symbol `i` stands for `values[i]` (sorted ascending)
    Exact { values: Vec<f64> },
    /// Symbol `i` covers `[min + i·w, min + (i+1)·w)`, `w = (max - min) / bins`
    EqualWidth { bins: usize, min: f64, max: f64 },
}

/// Finite alphabet produced for one input
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Alphabet {
    /// Number of symbols k
    pub size: usize,
    /// Mapping used to produce the symbols
    pub quantization: Quantization,
}

impl Alphabet {
    /// Upper bound on the entropy of any distribution over this alphabet (bits)
    pub fn max_entropy(&self) -> f64 {
        (self.size as f64).log2()
    }
}

/// Discretized 1D data
#[derive(Debug, Clone, PartialEq)]
pub struct Discretized {
    /// Symbol index per input sample
    pub symbols: Vec<usize>,
    /// Alphabet the symbols are drawn from
    pub alphabet: Alphabet,
}

impl Discretized {
    pub fn alphabet_size(&self) -> usize {
        self.alphabet.size
    }
}

/// Discretized 2D field, same shape as the input
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteField {
    pub symbols: Array2<usize>,
    pub alphabet: Alphabet,
}

impl Binning {
    /// Validate the policy parameters
    pub fn validate(&self) -> Result<()> {
        let bins = match *self {
            Binning::Auto { bins, .. } => bins,
            Binning::Fixed(bins) => bins,
        };
        if bins < 2 {
            return Err(InfoError::invalid(format!(
                "bin count must be at least 2, got {}",
                bins
            )));
        }
        Ok(())
    }

    /// Map samples to symbols under this policy
    pub fn discretize(&self, values: &[f64]) -> Result<Discretized> {
        self.validate()?;
        if values.is_empty() {
            return Err(InfoError::invalid("cannot discretize an empty array"));
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(InfoError::invalid(format!("non-finite sample {}", bad)));
        }

        match *self {
            Binning::Fixed(bins) => Ok(equal_width(values, bins)),
            Binning::Auto { exact_threshold, bins } => {
                match distinct_values(values, exact_threshold) {
                    Some(distinct) => Ok(exact(values, distinct)),
                    None => Ok(equal_width(values, bins)),
                }
            }
        }
    }

    /// Discretize a 2D field (row-major), keeping its shape
    pub fn discretize_field(&self, field: ArrayView2<'_, f64>) -> Result<DiscreteField> {
        let values: Vec<f64> = field.iter().copied().collect();
        let Discretized { symbols, alphabet } = self.discretize(&values)?;
        let symbols = Array2::from_shape_vec(field.dim(), symbols)
            .map_err(|e| InfoError::invalid(e.to_string()))?;
        Ok(DiscreteField { symbols, alphabet })
    }
}

/// `discretize(values, bins?)`: `None` selects the default [`Binning::Auto`] policy,
/// `Some(n)` forces `n` equal-width bins.
pub fn discretize(values: &[f64], bins: Option<usize>) -> Result<Discretized> {
    Binning::from(bins).discretize(values)
}

/// Field counterpart of [`discretize`]
pub fn discretize_field(field: ArrayView2<'_, f64>, bins: Option<usize>) -> Result<DiscreteField> {
    Binning::from(bins).discretize_field(field)
}

/// Sorted distinct values, or `None` once more than `limit` are seen
fn distinct_values(values: &[f64], limit: usize) -> Option<Vec<f64>> {
    let mut distinct: Vec<f64> = Vec::new();
    for &v in values {
        // -0.0 and 0.0 are one symbol
        let v = v + 0.0;
        if let Err(pos) = distinct.binary_search_by(|d| d.total_cmp(&v)) {
            if distinct.len() == limit {
                return None;
            }
            distinct.insert(pos, v);
        }
    }
    Some(distinct)
}

fn exact(values: &[f64], distinct: Vec<f64>) -> Discretized {
    let symbols = values
        .iter()
        .map(|&v| {
            let v = v + 0.0;
            distinct
                .binary_search_by(|d| d.total_cmp(&v))
                .unwrap_or_else(|pos| pos)
        })
        .collect();

    Discretized {
        symbols,
        alphabet: Alphabet {
            size: distinct.len(),
            quantization: Quantization::Exact { values: distinct },
        },
    }
}

fn equal_width(values: &[f64], bins: usize) -> Discretized {
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let span = max - min;

    if span <= 0.0 {
        return Discretized {
            symbols: vec![0; values.len()],
            alphabet: Alphabet {
                size: 1,
                quantization: Quantization::Exact { values: vec![min + 0.0] },
            },
        };
    }

    // A finite range can still overflow `max - min`; halving keeps it finite
    let position = |v: f64| {
        if span.is_finite() {
            (v - min) / span
        } else {
            (v / 2.0 - min / 2.0) / (max / 2.0 - min / 2.0)
        }
    };

    let symbols = values
        .iter()
        .map(|&v| {
            let bin = (position(v) * bins as f64).floor() as usize;
            // max lands on the upper edge of the last bin
            bin.min(bins - 1)
        })
        .collect();

    Discretized {
        symbols,
        alphabet: Alphabet {
            size: bins,
            quantization: Quantization::EqualWidth { bins, min, max },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_exact_small_alphabet() {
        let d = discretize(&[0.5, 0.0, 1.0, 0.5, 0.0], None).unwrap();
        assert_eq!(d.alphabet_size(), 3);
        assert_eq!(d.symbols, vec![1, 0, 2, 1, 0]);
        assert_eq!(
            d.alphabet.quantization,
            Quantization::Exact { values: vec![0.0, 0.5, 1.0] }
        );
    }

    #[test]
    fn test_negative_zero_is_zero() {
        let d = discretize(&[-0.0, 0.0, 1.0], None).unwrap();
        assert_eq!(d.alphabet_size(), 2);
        assert_eq!(d.symbols, vec![0, 0, 1]);
    }

    #[test]
    fn test_continuous_falls_back_to_bins() {
        let values: Vec<f64> = (0..100).map(|i| i as f64 / 99.0).collect();
        let d = discretize(&values, None).unwrap();
        assert_eq!(d.alphabet_size(), DEFAULT_BINS);
        assert_eq!(d.symbols[0], 0);
        assert_eq!(d.symbols[99], DEFAULT_BINS - 1);
        assert!(d.symbols.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_fixed_bins() {
        let d = discretize(&[0.0, 0.24, 0.26, 0.5, 0.74, 1.0], Some(4)).unwrap();
        assert_eq!(d.alphabet_size(), 4);
        assert_eq!(d.symbols, vec![0, 0, 1, 2, 2, 3]);
    }

    #[test]
    fn test_extreme_range_keeps_distinct_values() {
        let d = discretize(&[-1e308, 0.0, 1e308], Some(4)).unwrap();
        assert_eq!(d.symbols, vec![0, 2, 3]);

        let d = discretize(&[f64::MAX, -f64::MAX, 0.0], Some(2)).unwrap();
        assert_eq!(d.symbols, vec![1, 0, 1]);
    }

    #[test]
    fn test_constant_input() {
        let d = discretize(&[0.3; 10], None).unwrap();
        assert_eq!(d.alphabet_size(), 1);
        assert!(d.symbols.iter().all(|&s| s == 0));

        let d = discretize(&[0.3; 10], Some(8)).unwrap();
        assert_eq!(d.alphabet_size(), 1);
        assert!(d.symbols.iter().all(|&s| s == 0));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(discretize(&[], None), Err(InfoError::InvalidInput(_))));
        assert!(matches!(discretize(&[1.0, 2.0], Some(1)), Err(InfoError::InvalidInput(_))));
        assert!(matches!(
            discretize(&[1.0, f64::NAN], None),
            Err(InfoError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_field_keeps_shape() {
        let field = array![[0.0, 1.0, 0.0], [1.0, 0.0, 1.0]];
        let d = discretize_field(field.view(), None).unwrap();
        assert_eq!(d.symbols.dim(), (2, 3));
        assert_eq!(d.symbols, array![[0, 1, 0], [1, 0, 1]]);
        assert_eq!(d.alphabet.size, 2);
        assert!((d.alphabet.max_entropy() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_deterministic() {
        let values: Vec<f64> = (0..50).map(|i| ((i * 37) % 11) as f64 * 0.13).collect();
        assert_eq!(discretize(&values, None).unwrap(), discretize(&values, None).unwrap());
    }
}
